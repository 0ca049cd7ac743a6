use std::path::PathBuf;
use clap::Parser;
use crate::config::constants::{DEFAULT_MAX_REPOS, DEFAULT_PER_PAGE, DEFAULT_QUERY, GITHUB_TOKEN_ENV, MAX_PER_PAGE};
use crate::enums::sort_key::SortKey;
use crate::enums::sort_order::SortOrder;

#[derive(Parser, Debug)]
#[clap(name = "repo-health")]
#[clap(about = "GitHub repository analyzer: flags outdated and potentially broken repositories", long_about = None)]
pub struct Cli {
    /// Search query for repositories
    #[clap(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Output file for results (JSON)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Maximum number of repositories to check
    #[clap(long = "max_repos", alias = "max-repos", default_value_t = DEFAULT_MAX_REPOS)]
    pub max_repos: usize,

    #[clap(long, value_enum, default_value_t = SortKey::Stars)]
    pub sort: SortKey,

    #[clap(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    /// Results requested per page
    #[clap(
        long = "per_page",
        alias = "per-page",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PER_PAGE as i64)
    )]
    pub per_page: u8,

    /// Path to a TOML config file (defaults to ~/repo-health/config.toml)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// GitHub access token
    #[clap(long, env = GITHUB_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
}
