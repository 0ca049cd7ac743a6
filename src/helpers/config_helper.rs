use crate::config::constants::{
    BROKEN_ISSUES_THRESHOLD, BROKEN_THRESHOLD_DAYS, DEFAULT_MAX_RATE_LIMIT_WAITS,
    DEFAULT_MAX_RATE_LIMIT_WAIT_SECS, DEFAULT_MAX_RETRIES, DEFAULT_SEARCH_REQUESTS_PER_MINUTE,
    DEFAULT_TIMEOUT_SECS, GITHUB_API_BASE_URL, OUTDATED_THRESHOLD_DAYS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        GITHUB_API_BASE_URL.to_string()
    }

    pub fn default_user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_search_requests_per_minute() -> u32 {
        DEFAULT_SEARCH_REQUESTS_PER_MINUTE
    }

    pub fn default_max_retries() -> usize {
        DEFAULT_MAX_RETRIES
    }

    pub fn default_max_rate_limit_waits() -> u32 {
        DEFAULT_MAX_RATE_LIMIT_WAITS
    }

    pub fn default_max_rate_limit_wait_secs() -> u64 {
        DEFAULT_MAX_RATE_LIMIT_WAIT_SECS
    }

    pub fn default_outdated_days() -> i64 {
        OUTDATED_THRESHOLD_DAYS
    }

    pub fn default_broken_days() -> i64 {
        BROKEN_THRESHOLD_DAYS
    }

    pub fn default_broken_issue_count() -> u64 {
        BROKEN_ISSUES_THRESHOLD
    }
}
