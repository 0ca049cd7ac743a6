use std::time::Duration;

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
pub const SEARCH_REPOSITORIES_PATH: &str = "/search/repositories";

pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

pub const DEFAULT_QUERY: &str = "stars:>100";
pub const DEFAULT_MAX_REPOS: usize = 100;
pub const DEFAULT_PER_PAGE: u8 = 100;
pub const MAX_PER_PAGE: u8 = 100;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// GitHub allows 30 authenticated search requests per minute.
pub const DEFAULT_SEARCH_REQUESTS_PER_MINUTE: u32 = 30;

pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_MAX_RATE_LIMIT_WAITS: u32 = 3;
pub const DEFAULT_MAX_RATE_LIMIT_WAIT_SECS: u64 = 3600;
/// Ceiling for a single transient-failure backoff delay.
pub const MAX_BACKOFF_SECS: u64 = 3600;

pub const OUTDATED_THRESHOLD_DAYS: i64 = 365;
pub const BROKEN_THRESHOLD_DAYS: i64 = 180;
pub const BROKEN_ISSUES_THRESHOLD: u64 = 10;
/// Largest accepted day threshold (about a century).
pub const MAX_THRESHOLD_DAYS: i64 = 36_500;

pub const CONFIG_DIR_NAME: &str = "repo-health";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
