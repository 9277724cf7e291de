//! Animation ticker - periodic `Event::Tick` while a spinner is visible

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::messages::{Event, EventSender};

pub struct AnimationTicker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl AnimationTicker {
    pub fn new(period: Duration) -> Self {
        AnimationTicker { period, handle: None }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start ticking unless already running
    pub fn start(&mut self, events: EventSender) {
        if self.is_running() {
            return;
        }
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if events.send(Event::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stop ticking. Ticks already queued are left for the loop to ignore.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for AnimationTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::events::create_channel;

    #[tokio::test]
    async fn test_ticks_until_stopped() {
        let (tx, mut rx) = create_channel();
        let mut ticker = AnimationTicker::new(Duration::from_millis(5));
        ticker.start(tx.clone());
        assert!(ticker.is_running());

        let first = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
        assert_eq!(first, Some(Event::Tick));

        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[tokio::test]
    async fn test_restart_after_stop() {
        let (tx, _rx) = create_channel();
        let mut ticker = AnimationTicker::new(Duration::from_millis(50));
        ticker.start(tx.clone());
        ticker.start(tx.clone());
        ticker.stop();
        assert!(!ticker.is_running());

        ticker.start(tx);
        assert!(ticker.is_running());
    }
}
