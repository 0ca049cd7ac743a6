use std::time::Duration;
use chrono::{DateTime, Utc};
use crate::config::constants::{RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER};
use crate::structs::http_response::HttpResponse;

pub struct RateLimitHelper;

impl RateLimitHelper {
    /// Reset instant of an exhausted quota, or `None` when `response` is not a rate-limit refusal.
    ///
    /// A refusal is a 403 or 429 whose remaining-requests header is `0` and
    /// whose reset header carries a Unix timestamp.
    pub fn exhausted_until(response: &HttpResponse) -> Option<DateTime<Utc>> {
        if response.status != 403 && response.status != 429 {
            return None;
        }

        let remaining: u64 = response.header(RATE_LIMIT_REMAINING_HEADER)?.trim().parse().ok()?;
        if remaining != 0 {
            return None;
        }

        let reset_epoch: i64 = response.header(RATE_LIMIT_RESET_HEADER)?.trim().parse().ok()?;
        DateTime::from_timestamp(reset_epoch, 0)
    }

    /// Time to sleep before the quota is back: one second past the reset, never negative.
    pub fn wait_duration(reset_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
        let seconds = reset_at.timestamp() - now.timestamp() + 1;
        Duration::from_secs(seconds.max(0) as u64)
    }
}
