use chrono::{DateTime, Utc};
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::services::classifier::Classifier;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::repository_metadata::RepositoryMetadata;

pub struct ReportBuilder {
    classifier: Classifier,
}

impl ReportBuilder {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn build(&self, metadata: &RepositoryMetadata) -> RepoHealthResult<AnalysisResult> {
        self.build_at(metadata, Utc::now())
    }

    /// Summarise one repository. Every display field except the description is required.
    pub fn build_at(&self, metadata: &RepositoryMetadata, now: DateTime<Utc>) -> RepoHealthResult<AnalysisResult> {
        let name = metadata.full_name.as_deref();
        let missing = |field: &str| RepoHealthError::missing_field(name, field);

        Ok(AnalysisResult {
            name: metadata.full_name.clone().ok_or_else(|| missing("full_name"))?,
            url: metadata.html_url.clone().ok_or_else(|| missing("html_url"))?,
            description: metadata.description.clone(),
            stars: metadata.stargazers_count.ok_or_else(|| missing("stargazers_count"))?,
            open_issues: metadata.open_issues_count.ok_or_else(|| missing("open_issues_count"))?,
            last_push: metadata.pushed_at.ok_or_else(|| missing("pushed_at"))?,
            created_at: metadata.created_at.ok_or_else(|| missing("created_at"))?,
            is_outdated: self.classifier.is_outdated_at(metadata, now),
            is_broken: self.classifier.is_broken_at(metadata, now),
        })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn complete(now: DateTime<Utc>) -> RepositoryMetadata {
        RepositoryMetadata {
            full_name: Some("octo/hello".to_string()),
            html_url: Some("https://github.com/octo/hello".to_string()),
            description: None,
            stargazers_count: Some(1_234),
            open_issues_count: Some(42),
            created_at: Some(now - Duration::days(3_000)),
            pushed_at: Some(now - Duration::days(400)),
            ..Default::default()
        }
    }

    #[test]
    fn builds_record_with_both_flags() {
        let now = Utc::now();
        let result = ReportBuilder::default().build_at(&complete(now), now).unwrap();

        assert_eq!(result.name, "octo/hello");
        assert_eq!(result.stars, 1_234);
        assert_eq!(result.open_issues, 42);
        assert_eq!(result.description, None);
        assert!(result.is_outdated);
        assert!(result.is_broken);
    }

    #[test]
    fn missing_required_field_fails() {
        let now = Utc::now();
        let mut metadata = complete(now);
        metadata.stargazers_count = None;

        match ReportBuilder::default().build_at(&metadata, now) {
            Err(RepoHealthError::MissingField { repository, field }) => {
                assert_eq!(repository, "octo/hello");
                assert_eq!(field, "stargazers_count");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_push_timestamp_fails_the_build() {
        let now = Utc::now();
        let mut metadata = complete(now);
        metadata.pushed_at = None;

        let err = ReportBuilder::default().build_at(&metadata, now).unwrap_err();
        assert!(matches!(err, RepoHealthError::MissingField { ref field, .. } if field == "pushed_at"));
    }
}
