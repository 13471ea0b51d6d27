use rollcall_collector::{Collector, CompletionReason};
use rollcall_core::{CollectorConfig, Username};
use rollcall_page::{CardSnapshot, PageSource, Result as PageResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// In-memory page that replays scripted card frames and extent readings.
///
/// Each `visible_cards` call pops the next frame; once the script runs out,
/// the page sticks on the last frame (a real page keeps rendering whatever
/// it last loaded). Extents behave the same way.
struct ScriptedPage {
    frames: Mutex<VecDeque<Vec<CardSnapshot>>>,
    current_frame: Mutex<Vec<CardSnapshot>>,
    extents: Mutex<VecDeque<u64>>,
    current_extent: Mutex<u64>,
    load_more_calls: AtomicU32,
}

impl ScriptedPage {
    fn new(frames: Vec<Vec<CardSnapshot>>, extents: Vec<u64>) -> Self {
        Self {
            frames: Mutex::new(frames.into()),
            current_frame: Mutex::new(Vec::new()),
            extents: Mutex::new(extents.into()),
            current_extent: Mutex::new(0),
            load_more_calls: AtomicU32::new(0),
        }
    }

    fn load_more_calls(&self) -> u32 {
        self.load_more_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PageSource for ScriptedPage {
    async fn visible_cards(&self) -> PageResult<Vec<CardSnapshot>> {
        let mut frames = self.frames.lock().expect("frames lock");
        let mut current = self.current_frame.lock().expect("current frame lock");
        if let Some(frame) = frames.pop_front() {
            *current = frame;
        }
        Ok(current.clone())
    }

    async fn trigger_load_more(&self) -> PageResult<()> {
        self.load_more_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn content_extent(&self) -> PageResult<u64> {
        let mut extents = self.extents.lock().expect("extents lock");
        let mut current = self.current_extent.lock().expect("current extent lock");
        if let Some(extent) = extents.pop_front() {
            *current = extent;
        }
        Ok(*current)
    }
}

fn card(path: &str, name: &str) -> CardSnapshot {
    CardSnapshot {
        profile_path: Some(path.to_string()),
        display_name: Some(name.to_string()),
    }
}

fn fast_config() -> CollectorConfig {
    CollectorConfig {
        stagnation_threshold: 3,
        max_load_more_attempts: 500,
        poll_interval_ms: 0,
    }
}

#[tokio::test]
async fn test_stagnation_terminates_without_further_load_more() {
    // One productive pass, then the same two cards forever while the extent
    // keeps moving (so extent stabilization never fires).
    let page = ScriptedPage::new(
        vec![vec![card("/alice", "Alice A"), card("/bob", "Bob B")]],
        vec![100, 200, 300, 400, 500],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.reason, CompletionReason::Stagnation);
    assert_eq!(summary.total, 2);
    // Passes 1-3 each requested more content; the stagnating pass and the
    // final extract did not.
    assert_eq!(page.load_more_calls(), 3);
    assert_eq!(summary.passes, 5);
}

#[tokio::test]
async fn test_end_of_content_runs_final_extract() {
    // The extent stops growing after the first scroll; a trailing card shows
    // up only in the frame rendered by that last load.
    let page = ScriptedPage::new(
        vec![
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A"), card("/bob", "Bob B")],
        ],
        vec![100, 100],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.reason, CompletionReason::EndOfContent);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.passes, 3);

    let bob = Username::new("@bob").expect("valid username");
    assert!(collector.roster().get(&bob).is_some());
}

#[tokio::test]
async fn test_attempt_cap_is_terminal_but_distinct() {
    // Every pass yields a new user and the extent never settles, so only the
    // cap can end the run.
    let page = ScriptedPage::new(
        vec![
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A"), card("/bob", "Bob B")],
            vec![
                card("/alice", "Alice A"),
                card("/bob", "Bob B"),
                card("/carol", "Carol C"),
            ],
        ],
        vec![100, 200, 300],
    );

    let config = CollectorConfig {
        max_load_more_attempts: 2,
        ..fast_config()
    };
    let mut collector = Collector::new(config);
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.reason, CompletionReason::AttemptCapReached);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.load_more_attempts, 2);
    assert_eq!(page.load_more_calls(), 3);
}

#[tokio::test]
async fn test_no_data_found_is_distinct() {
    let page = ScriptedPage::new(vec![vec![]], vec![100, 200, 300, 400]);

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert!(summary.is_empty());
    assert_eq!(summary.reason, CompletionReason::Stagnation);
    assert!(collector.roster().is_empty());
}

#[tokio::test]
async fn test_dedup_across_passes_first_display_name_wins() {
    // Alice reappears in a later frame under a different display name.
    let page = ScriptedPage::new(
        vec![
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice Renamed"), card("/bob", "Bob B")],
        ],
        vec![100, 100],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.total, 2);
    let alice = Username::new("@alice").expect("valid username");
    let record = collector.roster().get(&alice).expect("alice collected");
    assert_eq!(record.display_name, "Alice A");
}

#[tokio::test]
async fn test_stagnation_counter_resets_on_new_records() {
    // Two empty passes, then a new user, then three empty passes: the reset
    // means termination needs the full threshold again after the new record.
    let page = ScriptedPage::new(
        vec![
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A")],
            vec![card("/alice", "Alice A"), card("/bob", "Bob B")],
        ],
        vec![100, 200, 300, 400, 500, 600, 700],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.reason, CompletionReason::Stagnation);
    assert_eq!(summary.total, 2);
    // Passes: 1 (add), 2-3 (empty), 4 (add, reset), 5-7 (empty, stagnation),
    // 8 (final extract). Load-more after passes 1-6.
    assert_eq!(summary.passes, 8);
    assert_eq!(page.load_more_calls(), 6);
}

#[tokio::test]
async fn test_incomplete_cards_are_skipped_silently() {
    let incomplete_link = CardSnapshot {
        profile_path: Some("/ghost".to_string()),
        display_name: None,
    };
    let incomplete_name = CardSnapshot {
        profile_path: None,
        display_name: Some("No Link".to_string()),
    };
    let page = ScriptedPage::new(
        vec![vec![
            incomplete_link,
            incomplete_name,
            card("/alice", "Alice A"),
        ]],
        vec![100, 100],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(summary.total, 1);
    let ghost = Username::new("@ghost").expect("valid username");
    assert!(collector.roster().get(&ghost).is_none());
}

#[tokio::test]
async fn test_roster_matches_summary_total() {
    let page = ScriptedPage::new(
        vec![vec![card("/alice", "Alice A"), card("/bob", "Bob B")]],
        vec![100, 100],
    );

    let mut collector = Collector::new(fast_config());
    let summary = collector.run(&page).await.expect("run collector");

    assert_eq!(collector.roster().len(), summary.total);
    let order: Vec<_> = collector
        .roster()
        .iter()
        .map(|r| r.username.as_str())
        .collect();
    assert_eq!(order, vec!["@alice", "@bob"]);
}
