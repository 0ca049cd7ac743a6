use serde::Deserialize;
use crate::structs::repository_metadata::RepositoryMetadata;

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub incomplete_results: bool,

    pub items: Vec<RepositoryMetadata>,
}
