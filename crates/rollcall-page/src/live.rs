//! Chromiumoxide-backed live implementation of the page boundary.

use crate::card::CardParser;
use crate::error::{PageError, Result};
use crate::fingerprint::FingerprintConfig;
use crate::source::{CardSnapshot, PageSource};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures_util::stream::StreamExt;
use rollcall_core::AppConfig;
use std::time::Duration;

const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.documentElement.scrollHeight)";
const SCROLL_HEIGHT: &str = "document.documentElement.scrollHeight";

/// Live page backed by a headless Chromium instance.
///
/// Owns the browser for the lifetime of the run; dropping it tears the
/// session down.
pub struct LivePage {
    browser: Browser,
    page: Page,
    parser: CardParser,
}

impl LivePage {
    /// Launch a browser, navigate to the target page, and wait for it to
    /// settle.
    pub async fn launch(config: &AppConfig, url: &str) -> Result<Self> {
        let fingerprint = FingerprintConfig::randomized();

        let mut builder = BrowserConfig::builder()
            .window_size(config.browser.window_width, config.browser.window_height)
            .no_sandbox()
            .arg(format!("--user-agent={}", fingerprint.user_agent));
        if !config.browser.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(PageError::Chromium)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| PageError::Chromium(e.to_string()))?;

        // Drive CDP events for the lifetime of the browser
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let parser = CardParser::new(&config.selectors)?;

        tracing::debug!("Navigating to {}", url);
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| PageError::Navigation(e.to_string()))?;

        let timeout = Duration::from_secs(config.browser.navigation_timeout_secs);
        match tokio::time::timeout(timeout, page.wait_for_navigation()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(PageError::Navigation(e.to_string())),
            Err(_) => {
                return Err(PageError::Timeout(format!(
                    "navigation to {url} did not settle within {}s",
                    config.browser.navigation_timeout_secs
                )))
            }
        }

        Ok(Self {
            browser,
            page,
            parser,
        })
    }

    /// Tear the browser session down.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| PageError::Chromium(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PageSource for LivePage {
    async fn visible_cards(&self) -> Result<Vec<CardSnapshot>> {
        let html = self
            .page
            .content()
            .await
            .map_err(|e| PageError::Chromium(e.to_string()))?;
        Ok(self.parser.parse(&html))
    }

    async fn trigger_load_more(&self) -> Result<()> {
        self.page
            .evaluate(SCROLL_TO_BOTTOM)
            .await
            .map_err(|e| PageError::Evaluation(e.to_string()))?;
        Ok(())
    }

    async fn content_extent(&self) -> Result<u64> {
        self.page
            .evaluate(SCROLL_HEIGHT)
            .await
            .map_err(|e| PageError::Evaluation(e.to_string()))?
            .into_value::<u64>()
            .map_err(|e| PageError::Evaluation(e.to_string()))
    }
}

/// Helper to extract the host from a target URL.
pub fn target_host(url: &str) -> Result<String> {
    let url = url::Url::parse(url)
        .map_err(|e| PageError::Navigation(format!("Invalid URL: {e}")))?;

    url.host_str()
        .ok_or_else(|| PageError::Navigation("No host in URL".to_string()))
        .map(ToString::to_string)
}
