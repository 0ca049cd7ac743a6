use chrono::{DateTime, Duration, Utc};
use crate::structs::config::threshold_config::ThresholdConfig;
use crate::structs::repository_metadata::RepositoryMetadata;

/// Staleness heuristics over repository metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    thresholds: ThresholdConfig,
}

impl Classifier {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self { thresholds }
    }

    /// Last push strictly older than `outdated_days` before `now`.
    pub fn is_outdated_at(&self, metadata: &RepositoryMetadata, now: DateTime<Utc>) -> bool {
        match metadata.pushed_at {
            Some(pushed_at) => Self::older_than(now, pushed_at, self.thresholds.outdated_days),
            None => false,
        }
    }

    /// More than `broken_issue_count` open issues and no push within `broken_days`.
    pub fn is_broken_at(&self, metadata: &RepositoryMetadata, now: DateTime<Utc>) -> bool {
        let (Some(pushed_at), Some(open_issues)) = (metadata.pushed_at, metadata.open_issues_count) else {
            return false;
        };

        let has_open_issues = open_issues > self.thresholds.broken_issue_count;
        let no_recent_commits = Self::older_than(now, pushed_at, self.thresholds.broken_days);
        has_open_issues && no_recent_commits
    }

    /// A threshold too large to represent is never exceeded.
    fn older_than(now: DateTime<Utc>, pushed_at: DateTime<Utc>, days: i64) -> bool {
        Duration::try_days(days).is_some_and(|threshold| now - pushed_at > threshold)
    }
}

pub fn is_repo_outdated(metadata: Option<&RepositoryMetadata>) -> bool {
    is_repo_outdated_at(metadata, Utc::now())
}

pub fn is_repo_outdated_at(metadata: Option<&RepositoryMetadata>, now: DateTime<Utc>) -> bool {
    metadata.is_some_and(|m| Classifier::default().is_outdated_at(m, now))
}

pub fn is_repo_broken(metadata: Option<&RepositoryMetadata>) -> bool {
    is_repo_broken_at(metadata, Utc::now())
}

pub fn is_repo_broken_at(metadata: Option<&RepositoryMetadata>, now: DateTime<Utc>) -> bool {
    metadata.is_some_and(|m| Classifier::default().is_broken_at(m, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_760_000_000, 0).unwrap()
    }

    fn pushed(age: Duration, open_issues: u64) -> RepositoryMetadata {
        RepositoryMetadata {
            full_name: Some("octo/repo".to_string()),
            pushed_at: Some(now() - age),
            open_issues_count: Some(open_issues),
            ..Default::default()
        }
    }

    #[test]
    fn exactly_threshold_is_not_outdated() {
        let repo = pushed(Duration::days(365), 0);
        assert!(!is_repo_outdated_at(Some(&repo), now()));

        let repo = pushed(Duration::days(365) + Duration::seconds(1), 0);
        assert!(is_repo_outdated_at(Some(&repo), now()));
    }

    #[test]
    fn missing_metadata_or_push_is_neither() {
        let repo = RepositoryMetadata {
            open_issues_count: Some(500),
            ..Default::default()
        };

        assert!(!is_repo_outdated_at(None, now()));
        assert!(!is_repo_broken_at(None, now()));
        assert!(!is_repo_outdated_at(Some(&repo), now()));
        assert!(!is_repo_broken_at(Some(&repo), now()));
    }

    #[test]
    fn missing_issue_count_is_not_broken() {
        let mut repo = pushed(Duration::days(400), 0);
        repo.open_issues_count = None;
        assert!(!is_repo_broken_at(Some(&repo), now()));
        assert!(is_repo_outdated_at(Some(&repo), now()));
    }

    #[test]
    fn stale_repo_with_many_issues_is_broken() {
        let repo = pushed(Duration::days(181), 11);
        assert!(is_repo_broken_at(Some(&repo), now()));
        assert!(!is_repo_outdated_at(Some(&repo), now()));
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let classifier = Classifier::new(ThresholdConfig {
            outdated_days: 30,
            broken_days: 10,
            broken_issue_count: 0,
        });
        let repo = pushed(Duration::days(31), 1);

        assert!(classifier.is_outdated_at(&repo, now()));
        assert!(classifier.is_broken_at(&repo, now()));
    }

    #[test]
    fn unrepresentable_thresholds_flag_nothing() {
        let classifier = Classifier::new(ThresholdConfig {
            outdated_days: 200_000_000_000_000,
            broken_days: i64::MAX,
            broken_issue_count: 0,
        });
        let repo = RepositoryMetadata {
            pushed_at: DateTime::from_timestamp(0, 0),
            open_issues_count: Some(1_000),
            ..Default::default()
        };

        assert!(!classifier.is_outdated_at(&repo, now()));
        assert!(!classifier.is_broken_at(&repo, now()));
    }

    #[test]
    fn wall_clock_variants_classify_ancient_pushes() {
        let repo = RepositoryMetadata {
            pushed_at: DateTime::from_timestamp(0, 0),
            open_issues_count: Some(100),
            ..Default::default()
        };
        assert!(is_repo_outdated(Some(&repo)));
        assert!(is_repo_broken(Some(&repo)));
    }

    proptest! {
        #[test]
        fn older_than_a_year_is_outdated(extra_secs in 1i64..10 * 365 * 86_400) {
            let repo = pushed(Duration::days(365) + Duration::seconds(extra_secs), 0);
            prop_assert!(is_repo_outdated_at(Some(&repo), now()));
        }

        #[test]
        fn within_a_year_is_not_outdated(age_secs in 0i64..=365 * 86_400) {
            let repo = pushed(Duration::seconds(age_secs), 0);
            prop_assert!(!is_repo_outdated_at(Some(&repo), now()));
        }

        #[test]
        fn few_issues_is_never_broken(age_days in 0i64..5_000, issues in 0u64..=10) {
            let repo = pushed(Duration::days(age_days), issues);
            prop_assert!(!is_repo_broken_at(Some(&repo), now()));
        }

        #[test]
        fn recent_push_is_never_broken(age_secs in 0i64..=180 * 86_400, issues in 0u64..100_000) {
            let repo = pushed(Duration::seconds(age_secs), issues);
            prop_assert!(!is_repo_broken_at(Some(&repo), now()));
        }
    }
}
