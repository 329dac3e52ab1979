extern crate reqwest;
extern crate serde_json;

use std::io;

#[derive(Fail, Debug)]
pub enum StatusError {
    #[fail(display = "I/O error: {}", _0)]
    IoError(io::Error),
    #[fail(display = "HTTP error: {}", _0)]
    HttpError(reqwest::Error),
    #[fail(display = "{}", reason)]
    Status { code: u16, reason: String },
    #[fail(display = "JSON error: {}", _0)]
    JsonError(serde_json::Error),
    #[fail(display = "Configuration error: {}", _0)]
    ConfigError(String),
    #[fail(display = "Poller thread panicked")]
    PollerPanicked,
}

impl StatusError {
    /// Text shown to the user when the endpoint answers with a non-success status.
    pub fn alert_text(&self) -> Option<&str> {
        match self {
            StatusError::Status { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        StatusError::JsonError(err)
    }
}

impl From<io::Error> for StatusError {
    fn from(err: io::Error) -> Self {
        StatusError::IoError(err)
    }
}

impl From<reqwest::Error> for StatusError {
    fn from(err: reqwest::Error) -> Self {
        StatusError::HttpError(err)
    }
}
