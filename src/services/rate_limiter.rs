use std::num::NonZeroU32;
use std::sync::Arc;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Proactive throttle for the search endpoint.
///
/// GitHub counts search requests against a per-minute quota that is separate
/// from the hourly core limit, so pages are spaced out before the server has
/// to refuse them.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn per_minute(requests: u32) -> Self {
        let requests = NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(requests))),
        }
    }

    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn burst_up_to_quota_does_not_wait() {
        let limiter = ApiRateLimiter::per_minute(5);
        let started = std::time::Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn zero_quota_falls_back_to_one() {
        let limiter = ApiRateLimiter::per_minute(0);
        assert!(limiter.limiter.check().is_ok());
        assert!(limiter.limiter.check().is_err());
    }
}
