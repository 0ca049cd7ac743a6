use clap::Parser;
use repo_health::config::config_manager::ConfigManager;
use repo_health::errors::ErrorHandler;
use repo_health::structs::cli::Cli;
use repo_health::workers::command_runner::{CommandRunner, RunOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let config = match ConfigManager::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            std::process::exit(1);
        }
    };

    let mut runner = CommandRunner::new(config);
    if let Err(e) = runner.run(RunOptions::from_cli(cli)).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
