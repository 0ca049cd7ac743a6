use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_search_requests_per_minute")]
    pub search_requests_per_minute: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            user_agent: ConfigHelper::default_user_agent(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            search_requests_per_minute: ConfigHelper::default_search_requests_per_minute(),
        }
    }
}
