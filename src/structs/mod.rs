pub mod analysis_report;
pub mod analysis_result;
pub mod api_config;
pub mod cli;
pub mod config;
pub mod http_request;
pub mod http_response;
pub mod repository_metadata;
pub mod search_outcome;
pub mod search_page;
