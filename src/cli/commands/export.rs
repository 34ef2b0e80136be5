//! Export command implementation
//!
//! Exports a collection subtree: content files plus per-collection CSV
//! metadata tables.

use crate::adapters::fedora::FedoraClient;
use crate::cli::commands::print_summary;
use crate::config::load_config;
use crate::core::export::ExportWalker;
use crate::domain::{FolioError, Pid};
use chrono::Utc;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Collection PID to export (defaults to export.root_pid from config)
    #[arg(long)]
    pub pid: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = load_config(config_path)?;

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output directory from CLI");
            config.export.output_dir = output.clone();
        }

        let root = match self.pid.clone().or_else(|| config.export.root_pid.clone()) {
            Some(root) => root,
            None => {
                eprintln!("No collection PID given: pass --pid or set export.root_pid");
                return Ok(2);
            }
        };
        let pid = match Pid::from_str(&root) {
            Ok(pid) => pid,
            Err(e) => {
                eprintln!("Invalid PID '{root}': {e}");
                return Ok(2);
            }
        };

        if !self.yes {
            println!("Export configuration:");
            println!("  Collection: {pid}");
            println!("  Repository: {}", config.repository.rest_url);
            println!("  Output directory: {}", config.export.output_dir);
            print!("Proceed with export? [y/N] ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                println!("Aborted.");
                return Ok(0);
            }
        }

        let started = Utc::now();
        println!("Exporting collection {pid}, started at {started}");

        let client = FedoraClient::new(&config.repository)?;
        let walker = ExportWalker::new(
            Arc::new(client),
            config.repository.collection_model.as_str(),
            config.repository.compound_model.as_str(),
        );
        let output_dir = PathBuf::from(&config.export.output_dir);

        match walker.export_collection(&pid, &output_dir).await {
            Ok(summary) => {
                println!("Export of {pid} finished at {}", Utc::now());
                print_summary(&summary);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                if let FolioError::Export { detail, .. } = &e {
                    eprintln!("{detail}");
                }
                Ok(1)
            }
        }
    }
}
