//! Randomized launch fingerprint for the browser session.

use rand::Rng;

/// Launch fingerprint so the automated session blends in with
/// ordinary desktop traffic.
#[derive(Debug, Clone)]
pub struct FingerprintConfig {
    /// User-agent string passed to the browser at launch
    pub user_agent: String,
}

impl FingerprintConfig {
    /// Pick a randomized user agent from common desktop browsers.
    pub fn randomized() -> Self {
        let mut rng = rand::thread_rng();

        let user_agents = [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ];

        let ua_idx = rng.gen_range(0..user_agents.len());

        Self {
            user_agent: user_agents[ua_idx].to_string(),
        }
    }
}
