use chrono::{DateTime, Local};

use page::Page;
use render::Rendered;
use source::StatusSource;
use status::StatusReply;
use StatusError;

/// What to do with the polling loop after a cycle fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Alert once and never poll again. A reload is needed to recover.
    StopPolling,
    /// Keep the old page content and try again at the next interval.
    KeepPolling,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::StopPolling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Reschedule,
    Stop,
}

pub struct Updater<S, P> {
    source: S,
    page: P,
    policy: FailurePolicy,
    last_error: Option<StatusError>,
}

impl<S: StatusSource, P: Page> Updater<S, P> {
    pub fn new(source: S, page: P) -> Self {
        Updater {
            source,
            page,
            policy: FailurePolicy::default(),
            last_error: None,
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch, parse and render one status update. Returns the number of sites shown.
    pub fn update_at(&mut self, now: &DateTime<Local>) -> Result<usize, StatusError> {
        let body = self.source.fetch()?;
        let reply = StatusReply::from_json(&body)?;

        self.page.publish(&Rendered::new(&reply, now))?;

        Ok(reply.site_info.len())
    }

    pub fn update(&mut self) -> Result<usize, StatusError> {
        self.update_at(&Local::now())
    }

    /// Run one cycle and decide whether another should follow.
    pub fn tick(&mut self) -> Next {
        match self.update() {
            Ok(sites) => {
                info!("updated status for {} sites", sites);
                self.last_error = None;
                Next::Reschedule
            }
            Err(err) => {
                error!("status update failed: {}", err);
                if let Some(text) = err.alert_text() {
                    self.page.alert(text);
                }
                self.last_error = Some(err);

                match self.policy {
                    FailurePolicy::StopPolling => Next::Stop,
                    FailurePolicy::KeepPolling => Next::Reschedule,
                }
            }
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn last_error(&self) -> Option<&StatusError> {
        self.last_error.as_ref()
    }

    pub fn into_last_error(self) -> Option<StatusError> {
        self.last_error
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_parts(self) -> (S, P) {
        (self.source, self.page)
    }
}
