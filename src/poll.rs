use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use page::Page;
use source::StatusSource;
use updater::{Next, Updater};

/// Five minutes between the end of one cycle and the start of the next.
pub const POLL_INTERVAL: Duration = Duration::from_millis(300_000);

pub trait Timer {
    /// Wait for `delay` to pass. Returns false if the wait was cancelled.
    fn wait(&mut self, delay: Duration) -> bool;
}

/// Times out on a channel; sending on, or dropping, the other end cancels.
pub struct ChannelTimer {
    cancel: Receiver<()>,
}

impl ChannelTimer {
    pub fn pair() -> (Sender<()>, Self) {
        let (tx, rx) = channel();
        (tx, ChannelTimer { cancel: rx })
    }
}

impl Timer for ChannelTimer {
    fn wait(&mut self, delay: Duration) -> bool {
        match self.cancel.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => true,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    /// The updater gave up after a failed cycle.
    Failed,
    Cancelled,
}

/// Update now, then again `interval` after each cycle completes, until the
/// updater stops or the timer is cancelled.
pub fn run<S, P, T>(updater: &mut Updater<S, P>, interval: Duration, timer: &mut T) -> Stopped
where
    S: StatusSource,
    P: Page,
    T: Timer,
{
    loop {
        if updater.tick() == Next::Stop {
            warn!("polling stopped after failed update");
            return Stopped::Failed;
        }

        debug!("next update in {}s", interval.as_secs());
        if !timer.wait(interval) {
            info!("polling cancelled");
            return Stopped::Cancelled;
        }
    }
}

/// A poller running on its own thread. Dropping it cancels polling.
pub struct Poller<S, P> {
    cancel: Sender<()>,
    thread: JoinHandle<(Stopped, Updater<S, P>)>,
}

pub fn spawn<S, P>(mut updater: Updater<S, P>, interval: Duration) -> Poller<S, P>
where
    S: StatusSource + Send + 'static,
    P: Page + Send + 'static,
{
    let (cancel, mut timer) = ChannelTimer::pair();
    let thread = thread::spawn(move || {
        let stopped = run(&mut updater, interval, &mut timer);
        (stopped, updater)
    });

    Poller { cancel, thread }
}

impl<S, P> Poller<S, P> {
    /// Stop polling. A cycle already in progress finishes first.
    pub fn cancel(self) -> thread::Result<(Stopped, Updater<S, P>)> {
        let _ = self.cancel.send(());
        self.thread.join()
    }

    /// Wait for polling to stop on its own.
    pub fn join(self) -> thread::Result<(Stopped, Updater<S, P>)> {
        let Poller { cancel, thread } = self;
        let result = thread.join();
        drop(cancel);
        result
    }
}
