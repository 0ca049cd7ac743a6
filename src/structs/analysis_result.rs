use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stars: u64,
    pub open_issues: u64,
    pub last_push: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_outdated: bool,
    pub is_broken: bool,
}
