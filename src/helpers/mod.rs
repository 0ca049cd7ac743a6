pub mod config_helper;
pub mod rate_limit_helper;
