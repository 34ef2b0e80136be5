// folio - Fedora Repository Export Tool
// Licensed under the MIT License

use clap::Parser;
use folio::cli::{Cli, Commands};
use folio::config::{self, LoggingConfig};
use folio::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Pull the logging section from the config file when it loads; a broken
    // or missing config still gets console logging so the command can report
    // the problem properly.
    let (log_level, logging_config) = match config::load_config(&cli.config) {
        Ok(cfg) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| cfg.application.log_level.clone()),
            cfg.logging,
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "folio - Fedora repository export tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::ExportObject(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute(&cli.config).await,
    }
}
