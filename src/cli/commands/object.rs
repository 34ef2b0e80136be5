//! Single-object export command
//!
//! Exports one non-collection object directly. Constituents of compound
//! objects are skipped here and exported through their parent instead.

use crate::adapters::fedora::FedoraClient;
use crate::cli::commands::print_summary;
use crate::config::load_config;
use crate::core::export::ExportWalker;
use crate::domain::{FolioError, Pid};
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the export-object command
#[derive(Args, Debug)]
pub struct ExportObjectArgs {
    /// PID of the object to export
    #[arg(long)]
    pub pid: String,

    /// Override the output directory
    #[arg(long)]
    pub output: Option<String>,
}

impl ExportObjectArgs {
    /// Execute the export-object command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(pid = %self.pid, "Starting export-object command");

        let mut config = load_config(config_path)?;
        if let Some(output) = &self.output {
            config.export.output_dir = output.clone();
        }

        let pid = match Pid::from_str(&self.pid) {
            Ok(pid) => pid,
            Err(e) => {
                eprintln!("Invalid PID '{}': {e}", self.pid);
                return Ok(2);
            }
        };

        let client = FedoraClient::new(&config.repository)?;
        let walker = ExportWalker::new(
            Arc::new(client),
            config.repository.collection_model.as_str(),
            config.repository.compound_model.as_str(),
        );
        let output_dir = PathBuf::from(&config.export.output_dir);

        match walker.export_object(&pid, &output_dir).await {
            Ok(summary) => {
                if summary.constituents_deferred > 0 {
                    println!(
                        "{pid} is a constituent of a compound object; export it via its parent"
                    );
                }
                print_summary(&summary);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Object export failed");
                eprintln!("Object export failed: {e}");
                if let FolioError::Export { detail, .. } = &e {
                    eprintln!("{detail}");
                }
                Ok(1)
            }
        }
    }
}
