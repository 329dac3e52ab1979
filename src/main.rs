extern crate env_logger;
#[macro_use]
extern crate log;
extern crate gong_status;

use gong_status::poll::{self, Stopped};
use gong_status::{Config, HtmlFilePage, HttpSource, StatusError, Updater};

fn main() -> Result<(), StatusError> {
    env_logger::init();

    let config = Config::from_env()?;
    info!(
        "polling {} every {}s into {}",
        config.url,
        config.interval.as_secs(),
        config.page.display()
    );

    let source = HttpSource::new(config.url.clone());
    let page = HtmlFilePage::new(&config.page, config.interval);
    let updater = Updater::new(source, page).with_failure_policy(config.on_failure);

    let poller = poll::spawn(updater, config.interval);
    match poller.join() {
        Ok((Stopped::Failed, updater)) => match updater.into_last_error() {
            Some(err) => Err(err),
            None => Ok(()),
        },
        Ok((Stopped::Cancelled, _)) => Ok(()),
        Err(_) => Err(StatusError::PollerPanicked),
    }
}
