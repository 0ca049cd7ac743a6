use serde::{Deserialize, Serialize};
use crate::structs::config::api_settings::ApiSettings;
use crate::structs::config::retry_config::RetryConfig;
use crate::structs::config::threshold_config::ThresholdConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub thresholds: ThresholdConfig,
}
