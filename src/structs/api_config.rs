use std::time::Duration;
use crate::config::constants::timeout_duration;
use crate::structs::config::config::Config;
use crate::structs::config::retry_config::RetryConfig;

/// Everything the request wrapper needs to talk to the API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub search_requests_per_minute: u32,
    pub retry: RetryConfig,
}

impl ApiConfig {
    pub fn from_config(config: &Config, token: String) -> Self {
        Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token,
            user_agent: config.api.user_agent.clone(),
            timeout: timeout_duration(config.api.timeout_secs),
            search_requests_per_minute: config.api.search_requests_per_minute,
            retry: config.retry.clone(),
        }
    }
}
