//! Periodic tip publisher. The timer task lives exactly as long as its [`TipTicker`].

use super::{TipCatalog, TipRotator, NOT_READY};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

pub struct TipTicker {
    handle: JoinHandle<()>,
    current: watch::Receiver<Option<String>>,
}

impl TipTicker {
    /// Spawn the ticker on the current tokio runtime. The first tip is published one
    /// `period` after start.
    pub fn start(catalog: TipCatalog, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let mut rotator = TipRotator::new(catalog.len());
            rotator.prime();
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let idx = rotator.next();
                if idx == NOT_READY {
                    debug!("tip rotator not ready");
                    continue;
                }
                let Some(tip) = catalog.get(idx as usize) else {
                    continue;
                };
                if tx.send(Some(tip.to_string())).is_err() {
                    break;
                }
            }
        });
        Self { handle, current: rx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.current.clone()
    }

    /// Most recently published tip.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel the timer. Dropping the ticker has the same effect.
    pub fn stop(self) {}
}

impl Drop for TipTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tokio::time::timeout;

    #[tokio::test]
    async fn publishes_every_tip() {
        let catalog = TipCatalog::default();
        let ticker = TipTicker::start(catalog.clone(), Duration::from_millis(5));
        let mut rx = ticker.subscribe();
        assert_eq!(ticker.current(), None);

        // A slow consumer may skip a value, so read until every tip has shown up.
        let mut seen = HashSet::new();
        for _ in 0..catalog.len() * 10 {
            if seen.len() == catalog.len() {
                break;
            }
            timeout(Duration::from_secs(5), rx.changed())
                .await
                .expect("tick in time")
                .expect("ticker alive");
            let tip = rx.borrow_and_update().clone().expect("tip published");
            seen.insert(tip);
        }
        assert_eq!(seen.len(), catalog.len());
        assert!(ticker.is_running());
    }

    #[tokio::test]
    async fn stop_releases_the_timer() {
        let ticker = TipTicker::start(TipCatalog::default(), Duration::from_millis(5));
        let mut rx = ticker.subscribe();
        rx.borrow_and_update();
        ticker.stop();
        let closed = timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("sender dropped in time");
        assert!(closed.is_err());
    }
}
