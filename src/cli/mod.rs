//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for folio using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// folio - Fedora repository export tool
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml", env = "FOLIO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a collection subtree: content files plus metadata CSVs
    Export(commands::export::ExportArgs),

    /// Export a single non-collection object
    ExportObject(commands::object::ExportObjectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a starter configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["folio", "export"]);
        assert_eq!(cli.config, "folio.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_with_pid() {
        let cli = Cli::parse_from(["folio", "export", "--pid", "coccc:10504"]);
        if let Commands::Export(args) = cli.command {
            assert_eq!(args.pid.as_deref(), Some("coccc:10504"));
        } else {
            panic!("Expected export command");
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["folio", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["folio", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_object_requires_pid() {
        assert!(Cli::try_parse_from(["folio", "export-object"]).is_err());
        let cli = Cli::parse_from(["folio", "export-object", "--pid", "x:1"]);
        assert!(matches!(cli.command, Commands::ExportObject(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["folio", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["folio", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
