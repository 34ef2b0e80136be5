//! Configuration validation command

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid: {config_path}");
                println!("  Repository: {}", config.repository.rest_url);
                println!("  Resource index: {}", config.repository.ri_url);
                println!("  Output directory: {}", config.export.output_dir);
                if let Some(root_pid) = &config.export.root_pid {
                    println!("  Root PID: {root_pid}");
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {e}");
                Ok(2)
            }
        }
    }
}
