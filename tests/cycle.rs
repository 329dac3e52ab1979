extern crate gong_status;

use std::collections::VecDeque;
use std::time::Duration;

use gong_status::poll::{self, Stopped, Timer, POLL_INTERVAL};
use gong_status::status::DEFAULT_HEADER;
use gong_status::{FailurePolicy, MemoryPage, Slot, StatusError, StatusSource, Updater};

const FIXTURE: &str = r#"{"message":"GONG <a href=\"https://monitor.nso.edu\">status</a> monitor",
    "siteInfo":[{"siteCode":"M","age":45,"imageLink":"http://x/y.jpg","movieURL":"not-a-url"}]}"#;

const TWO_SITES: &str = r#"{"message":"","header":"Custom header","siteInfo":[
    {"siteCode":"U","age":4000,"imageLink":"no data","movieURL":"https://example.com/m"},
    {"siteCode":"B","age":30,"imageLink":"https://example.com/x.jpg","movieURL":"no data"}]}"#;

/// Replays canned responses and counts fetches.
struct Replay {
    responses: VecDeque<Result<String, StatusError>>,
    fetches: usize,
}

impl Replay {
    fn new(responses: Vec<Result<String, StatusError>>) -> Self {
        Replay {
            responses: responses.into_iter().collect(),
            fetches: 0,
        }
    }
}

impl StatusSource for Replay {
    fn fetch(&mut self) -> Result<String, StatusError> {
        self.fetches += 1;
        self.responses
            .pop_front()
            .expect("fetched more often than expected")
    }
}

/// Lets a fixed number of waits elapse instantly, then cancels.
struct Steps {
    remaining: usize,
    waits: Vec<Duration>,
}

impl Steps {
    fn new(remaining: usize) -> Self {
        Steps {
            remaining,
            waits: Vec::new(),
        }
    }
}

impl Timer for Steps {
    fn wait(&mut self, delay: Duration) -> bool {
        self.waits.push(delay);
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

fn cells(table: &str) -> Vec<&str> {
    table
        .split("<td>")
        .skip(1)
        .map(|cell| &cell[..cell.find("</td>").unwrap()])
        .collect()
}

fn unavailable() -> StatusError {
    StatusError::Status {
        code: 503,
        reason: "Service Unavailable".to_string(),
    }
}

#[test]
fn renders_fixture_end_to_end() {
    let mut updater = Updater::new(Replay::new(vec![Ok(FIXTURE.to_string())]), MemoryPage::new());
    let mut timer = Steps::new(0);

    assert_eq!(poll::run(&mut updater, POLL_INTERVAL, &mut timer), Stopped::Cancelled);

    let page = updater.page();
    assert_eq!(
        cells(page.slot(Slot::Main).unwrap()),
        vec![
            "Mauna Loa, HI, United States",
            "45 Seconds",
            "<a href=\"http://x/y.jpg\" target=\"_blank\">Latest</a>",
            "not-a-url",
        ]
    );
    assert_eq!(page.slot(Slot::Header), Some(DEFAULT_HEADER));
    assert_eq!(
        page.slot(Slot::Message),
        Some("GONG <a href=\"https://monitor.nso.edu\">status</a> monitor")
    );
    let updated = page.slot(Slot::Updated).unwrap();
    assert!(updated.starts_with("Updated "));
    assert!(updated.ends_with(" local time"));
    assert!(page.alerts().is_empty());
}

#[test]
fn keeps_server_order_and_header() {
    let mut updater = Updater::new(Replay::new(vec![Ok(TWO_SITES.to_string())]), MemoryPage::new());
    assert_eq!(updater.update().unwrap(), 2);

    let page = updater.page();
    assert_eq!(page.slot(Slot::Header), Some("Custom header"));
    assert_eq!(
        cells(page.slot(Slot::Main).unwrap()),
        vec![
            "Udaipur, India",
            "1 Hours 7 Minutes",
            "no data",
            "<a href=\"https://example.com/m\" target=\"_blank\">Movie</a>",
            "Big Bear, CA, United States",
            "30 Seconds",
            "<a href=\"https://example.com/x.jpg\" target=\"_blank\">Latest</a>",
            "no data",
        ]
    );
}

#[test]
fn reschedules_after_each_cycle() {
    let responses = vec![
        Ok(FIXTURE.to_string()),
        Ok(TWO_SITES.to_string()),
        Ok(FIXTURE.to_string()),
    ];
    let mut updater = Updater::new(Replay::new(responses), MemoryPage::new());
    let mut timer = Steps::new(2);

    assert_eq!(poll::run(&mut updater, POLL_INTERVAL, &mut timer), Stopped::Cancelled);
    assert_eq!(updater.source().fetches, 3);
    assert_eq!(timer.waits, vec![Duration::from_millis(300_000); 3]);
}

#[test]
fn failed_status_alerts_once_and_stops_polling() {
    let responses = vec![Err(unavailable()), Ok(FIXTURE.to_string())];
    let mut updater = Updater::new(Replay::new(responses), MemoryPage::new());
    let mut timer = Steps::new(5);

    assert_eq!(poll::run(&mut updater, POLL_INTERVAL, &mut timer), Stopped::Failed);

    assert_eq!(updater.source().fetches, 1);
    assert!(timer.waits.is_empty());
    assert_eq!(updater.page().alerts(), &["Service Unavailable".to_string()]);
    assert_eq!(updater.page().slot(Slot::Main), None);
}

#[test]
fn failure_after_success_keeps_old_page() {
    let responses = vec![Ok(FIXTURE.to_string()), Ok("{\"message\":".to_string())];
    let mut updater = Updater::new(Replay::new(responses), MemoryPage::new());
    let mut timer = Steps::new(5);

    assert_eq!(poll::run(&mut updater, POLL_INTERVAL, &mut timer), Stopped::Failed);

    assert_eq!(updater.source().fetches, 2);
    assert_eq!(timer.waits.len(), 1);
    assert!(updater.page().alerts().is_empty());
    assert!(updater.page().slot(Slot::Main).unwrap().contains("Mauna Loa"));
}

#[test]
fn keep_polling_policy_retries_next_interval() {
    let responses = vec![Err(unavailable()), Ok(FIXTURE.to_string())];
    let mut updater = Updater::new(Replay::new(responses), MemoryPage::new())
        .with_failure_policy(FailurePolicy::KeepPolling);
    let mut timer = Steps::new(1);

    assert_eq!(poll::run(&mut updater, POLL_INTERVAL, &mut timer), Stopped::Cancelled);

    assert_eq!(updater.source().fetches, 2);
    assert_eq!(updater.page().alerts().len(), 1);
    assert!(updater.page().slot(Slot::Main).unwrap().contains("Mauna Loa"));
}
