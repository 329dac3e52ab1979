use std::env;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use poll::POLL_INTERVAL;
use source::STATUS_URL;
use updater::FailurePolicy;
use StatusError;

pub const URL_VAR: &str = "GONG_STATUS_URL";
pub const PAGE_VAR: &str = "GONG_STATUS_PAGE";
pub const INTERVAL_VAR: &str = "GONG_STATUS_INTERVAL";
pub const ON_FAILURE_VAR: &str = "GONG_STATUS_ON_FAILURE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: Url,
    pub page: PathBuf,
    pub interval: Duration,
    pub on_failure: FailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, StatusError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StatusError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR).unwrap_or_else(|| STATUS_URL.to_string());
        let url = Url::parse(&url)
            .map_err(|err| StatusError::ConfigError(format!("{}: {}", URL_VAR, err)))?;

        let page = lookup(PAGE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("index.html"));

        let interval = match lookup(INTERVAL_VAR) {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(StatusError::ConfigError(format!(
                        "{} must be a positive number of seconds, got {:?}",
                        INTERVAL_VAR, secs
                    )))
                }
            },
            None => POLL_INTERVAL,
        };

        let on_failure = match lookup(ON_FAILURE_VAR).as_ref().map(|s| s.trim()) {
            None | Some("stop") => FailurePolicy::StopPolling,
            Some("continue") => FailurePolicy::KeepPolling,
            Some(other) => {
                return Err(StatusError::ConfigError(format!(
                    "{} must be \"stop\" or \"continue\", got {:?}",
                    ON_FAILURE_VAR, other
                )))
            }
        };

        Ok(Config {
            url,
            page,
            interval,
            on_failure,
        })
    }
}
