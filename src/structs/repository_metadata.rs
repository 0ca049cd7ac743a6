use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One repository as returned by the search API.
///
/// Every field is optional: the record is taken as-is and the report
/// builder decides which fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub stargazers_count: Option<u64>,

    #[serde(default)]
    pub open_issues_count: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}
