pub mod classifier;
pub mod github_client;
pub mod rate_limiter;
pub mod report_builder;
pub mod report_writer;
pub mod repository_search;
pub mod reqwest_transport;
