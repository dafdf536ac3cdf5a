use std::time::Duration;

use chrono::{Local, NaiveTime};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::utils;

pub const TICK: Duration = Duration::from_secs(1);

/// Where the clock reads the current wall-clock time from.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Repeating `HH:MM` display update.
///
/// The display is published on a `watch` channel; readers always see the
/// latest value.
pub struct Clock;

impl Clock {
    /// Starts ticking once per second, first tick immediately.
    ///
    /// Must be called inside a tokio runtime. The returned handle owns the
    /// background task: dropping it or calling [`ClockHandle::stop`] ends it.
    pub fn start<T: TimeSource>(source: T, display: watch::Sender<String>) -> ClockHandle {
        let task = tokio::spawn(async move {
            let mut ticker = interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if display.send(utils::format_clock(source.now())).is_err() {
                    // every receiver is gone
                    break;
                }
            }
        });

        ClockHandle { task: Some(task) }
    }

    /// Convenience for callers that don't already have a channel.
    pub fn start_with_channel<T: TimeSource>(source: T) -> (ClockHandle, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(utils::format_clock(source.now()));
        (Self::start(source, tx), rx)
    }
}

pub struct ClockHandle {
    task: Option<JoinHandle<()>>,
}

impl ClockHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the clock and waits for its task to wind down. Idempotent.
    pub async fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
