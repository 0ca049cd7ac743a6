use std::path::PathBuf;
use std::time::Instant;
use crate::config::constants::GITHUB_TOKEN_ENV;
use crate::config::config_manager::ConfigManager;
use crate::enums::completeness::Completeness;
use crate::enums::sort_key::SortKey;
use crate::enums::sort_order::SortOrder;
use crate::errors::RepoHealthResult;
use crate::logger::report_logger::ReportLogger;
use crate::services::classifier::Classifier;
use crate::services::github_client::GitHubClient;
use crate::services::report_builder::ReportBuilder;
use crate::services::report_writer::ReportWriter;
use crate::services::repository_search::SearchParams;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api_config::ApiConfig;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::traits::http_transport::HttpTransport;

/// Options for a single analysis run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub query: String,
    pub output: Option<PathBuf>,
    pub max_repos: usize,
    pub sort: SortKey,
    pub order: SortOrder,
    pub per_page: u8,
    pub token: Option<String>,
}

impl RunOptions {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            query: cli.query,
            output: cli.output,
            max_repos: cli.max_repos,
            sort: cli.sort,
            order: cli.order,
            per_page: cli.per_page,
            token: cli.token,
        }
    }

    fn search_params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            sort: self.sort,
            order: self.order,
            per_page: self.per_page,
            max_repos: self.max_repos,
        }
    }
}

pub struct CommandRunner {
    config: Config,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    /// Run the analysis against the live API.
    ///
    /// Returns `Ok(None)` without doing any work when no access token is available.
    pub async fn run(&mut self, options: RunOptions) -> RepoHealthResult<Option<AnalysisReport>> {
        let Some(token) = ConfigManager::resolve_token(options.token.clone()) else {
            let message = format!(
                "❌ Error: GitHub token not found. Please set {} in your environment variables.",
                GITHUB_TOKEN_ENV
            );
            log::error!("{}", message);
            eprintln!("{}", message);
            return Ok(None);
        };

        let api_config = ApiConfig::from_config(&self.config, token);
        let transport = ReqwestTransport::with_timeout(api_config.timeout)?;
        let client = GitHubClient::new(transport, api_config);

        self.analyze(&client, &options).await.map(Some)
    }

    /// Search, classify, print, sort and optionally persist.
    pub async fn analyze<T: HttpTransport>(&mut self, client: &GitHubClient<T>, options: &RunOptions) -> RepoHealthResult<AnalysisReport> {
        self.start_time = Some(Instant::now());

        log::info!("🔍 Searching repositories matching: {}", options.query);
        let outcome = client.search_repositories(&options.search_params()).await?;

        if let Completeness::Partial { page, reason } = &outcome.completeness {
            log::warn!(
                "⚠️ Search stopped early at page {} ({}); continuing with {} repositories",
                page,
                reason,
                outcome.repositories.len()
            );
        }

        let builder = ReportBuilder::new(Classifier::new(self.config.thresholds));
        let total = outcome.repositories.len();
        let mut results: Vec<AnalysisResult> = Vec::with_capacity(total);

        for (i, repo) in outcome.repositories.iter().enumerate() {
            let result = builder.build(repo)?;
            ReportLogger::print_repository(&result, i + 1, total);
            results.push(result);
        }

        Self::sort_by_stars(&mut results);

        let report = AnalysisReport {
            results,
            completeness: outcome.completeness,
        };
        ReportLogger::print_summary(&report);

        if let Some(path) = &options.output {
            ReportWriter::write_json(path, &report.results)?;
            log::info!("💾 Results saved to {}", path.display());
        }

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Analysis completed in {:.2}s", duration.as_secs_f64());
        }

        Ok(report)
    }

    /// Most-starred first; ties keep search order.
    pub fn sort_by_stars(results: &mut [AnalysisResult]) {
        results.sort_by(|a, b| b.stars.cmp(&a.stars));
    }
}
