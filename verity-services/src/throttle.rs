//! Minimum-interval throttle for LLM calls
//!
//! Enforces a fixed minimum delay between requests so summarization calls
//! are spaced out rather than bursted. Callers reserve a time slot while
//! holding the lock, then sleep outside it, so concurrent callers get
//! distinct, properly spaced slots.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Throttle enforcing a minimum interval between requests.
#[derive(Debug)]
pub struct Throttle {
    /// Earliest time the next request may fire
    next_slot: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            next_slot: Mutex::new(None),
            min_interval,
        }
    }

    /// Wait until a request may be made, reserving the following slot.
    ///
    /// The first call returns immediately; each later call fires at least
    /// `min_interval` after the previous one.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.min_interval);
            slot
        };

        sleep_until(slot).await;
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_acquire_immediate() {
        let throttle = Throttle::new(Duration::from_millis(100));

        let start = Instant::now();
        throttle.acquire().await;
        assert!(start.elapsed().as_millis() < 20);
    }

    #[tokio::test]
    async fn test_second_acquire_waits_min_interval() {
        let throttle = Throttle::new(Duration::from_millis(100));

        throttle.acquire().await;
        let start = Instant::now();
        throttle.acquire().await;
        let elapsed = start.elapsed();

        // small tolerance for timer coarseness
        assert!(
            elapsed >= throttle.min_interval() - Duration::from_millis(10),
            "should have waited ~{:?}, waited {:?}",
            throttle.min_interval(),
            elapsed
        );
    }

    #[tokio::test]
    async fn test_acquire_after_interval_immediate() {
        let throttle = Throttle::new(Duration::from_millis(50));

        throttle.acquire().await;
        tokio::time::sleep(throttle.min_interval() + Duration::from_millis(10)).await;

        let start = Instant::now();
        throttle.acquire().await;
        assert!(start.elapsed().as_millis() < 20);
    }
}
