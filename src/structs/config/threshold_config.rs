use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Days since the last push after which a repository is outdated.
    #[serde(default = "ConfigHelper::default_outdated_days")]
    pub outdated_days: i64,

    /// Days without a push that, together with many open issues, mark a repository as broken.
    #[serde(default = "ConfigHelper::default_broken_days")]
    pub broken_days: i64,

    /// Open issue count that must be exceeded for a repository to count as broken.
    #[serde(default = "ConfigHelper::default_broken_issue_count")]
    pub broken_issue_count: u64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            outdated_days: ConfigHelper::default_outdated_days(),
            broken_days: ConfigHelper::default_broken_days(),
            broken_issue_count: ConfigHelper::default_broken_issue_count(),
        }
    }
}
