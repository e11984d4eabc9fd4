use std::io;

use activity_board::storage::config::Config;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CliMode, parse_cli_mode, run_list_mode};
mod tui;
use tui::run_tui;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    setup_logging();

    let cli_mode = match parse_cli_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            tracing::error!("Failed to load config from {}: {}", Config::config_path().display(), e);
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        CliMode::List { server } => run_list_mode(apply_override(config, server)).await,
        CliMode::Interactive { server } => run_tui(apply_override(config, server)).await,
    }
}

fn apply_override(config: Config, server: Option<String>) -> Config {
    match server {
        Some(url) => {
            tracing::info!("Using server {} from command line", url);
            config.with_server_url(url)
        }
        None => config,
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "activity-board.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("activity-board started");
}
