extern crate chrono;
extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate hyper;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tempfile;

pub mod age;
pub mod config;
pub mod error;
pub mod page;
pub mod poll;
pub mod render;
pub mod sites;
pub mod source;
pub mod status;
pub mod updater;

pub use config::Config;
pub use error::StatusError;
pub use page::{HtmlFilePage, MemoryPage, Page, Slot};
pub use source::{HttpSource, StatusSource};
pub use status::{SiteStatus, StatusReply};
pub use updater::{FailurePolicy, Next, Updater};
