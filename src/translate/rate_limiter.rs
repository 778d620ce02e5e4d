// Minimum-interval limiter for translation requests.
//
// The public translate endpoint throttles clients that hammer it, so every
// request waits until at least `1 / requests_per_second` has passed since
// the previous one. A non-positive rate disables the limit.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Spaces out requests to at most `requests_per_second`.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<Slot>>,
}

struct Slot {
    /// Minimum time between requests; `None` means unlimited
    interval: Option<Duration>,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        let interval = (requests_per_second.is_finite() && requests_per_second > 0.0)
            .then(|| Duration::from_secs_f64(1.0 / requests_per_second));
        Self {
            inner: Arc::new(Mutex::new(Slot {
                interval,
                last_request: None,
            })),
        }
    }

    /// Wait until the next request is allowed.
    pub async fn acquire(&self) {
        let mut slot = self.inner.lock().await;

        if let (Some(interval), Some(last)) = (slot.interval, slot.last_request) {
            let elapsed = last.elapsed();
            if elapsed < interval {
                // Sleeping with the lock held keeps callers strictly ordered
                tokio::time::sleep(interval - elapsed).await;
            }
        }

        slot.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(1.0);
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_request_waits() {
        let limiter = RateLimiter::new(4.0); // 250ms spacing
        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(200),
            "Expected ~250ms delay, got {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_zero_rate_is_unlimited() {
        let limiter = RateLimiter::new(0.0);
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
