use std::fs;
use std::path::Path;
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::structs::analysis_result::AnalysisResult;

pub struct ReportWriter;

impl ReportWriter {
    /// Write `results` as a pretty-printed JSON array (two-space indent, UTF-8).
    pub fn write_json(path: &Path, results: &[AnalysisResult]) -> RepoHealthResult<()> {
        let json = serde_json::to_string_pretty(results)?;
        fs::write(path, json).map_err(|e| RepoHealthError::file_error(&path.display().to_string(), "write", &e.to_string()))
    }
}
