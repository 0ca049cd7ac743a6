use crate::enums::completeness::Completeness;
use crate::structs::repository_metadata::RepositoryMetadata;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub repositories: Vec<RepositoryMetadata>,
    pub completeness: Completeness,
}

impl SearchOutcome {
    pub fn is_partial(&self) -> bool {
        matches!(self.completeness, Completeness::Partial { .. })
    }
}
