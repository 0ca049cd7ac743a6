use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Limits applied by the request wrapper.
///
/// Transient failures back off for `2^attempt` seconds, up to `max_retries`
/// extra attempts. Rate-limit responses are waited out separately, at most
/// `max_rate_limit_waits` times and never longer than
/// `max_rate_limit_wait_secs` per wait.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: usize,

    #[serde(default = "ConfigHelper::default_max_rate_limit_waits")]
    pub max_rate_limit_waits: u32,

    #[serde(default = "ConfigHelper::default_max_rate_limit_wait_secs")]
    pub max_rate_limit_wait_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: ConfigHelper::default_max_retries(),
            max_rate_limit_waits: ConfigHelper::default_max_rate_limit_waits(),
            max_rate_limit_wait_secs: ConfigHelper::default_max_rate_limit_wait_secs(),
        }
    }
}
