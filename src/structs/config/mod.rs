pub mod api_settings;
pub mod config;
pub mod retry_config;
pub mod threshold_config;
