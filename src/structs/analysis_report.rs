use crate::enums::completeness::Completeness;
use crate::structs::analysis_result::AnalysisResult;

/// Results of one run, sorted by stars descending.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub results: Vec<AnalysisResult>,
    pub completeness: Completeness,
}

impl AnalysisReport {
    pub fn outdated_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_outdated).count()
    }

    pub fn broken_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_broken).count()
    }
}
