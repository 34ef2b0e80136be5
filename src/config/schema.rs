//! Configuration schema types
//!
//! This module defines the configuration structure mapped from `folio.toml`.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main folio configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Repository connection settings
    pub repository: RepositoryConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FolioConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.repository.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Repository connection configuration
///
/// `rest_url` is the REST API root (`.../objects/{pid}/...` is appended);
/// `ri_url` is the resource index search endpoint used for SPARQL tuple
/// queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Base URL of the repository REST API
    pub rest_url: String,

    /// URL of the resource index search endpoint
    pub ri_url: String,

    /// Username for HTTP Basic authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication (optional)
    /// Stored securely in memory and zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// TLS certificate verification enabled
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Content model marking an object as a collection
    #[serde(default = "default_collection_model")]
    pub collection_model: String,

    /// Content model marking an object as a compound object
    #[serde(default = "default_compound_model")]
    pub compound_model: String,
}

impl RepositoryConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.rest_url.starts_with("http://") && !self.rest_url.starts_with("https://") {
            return Err(format!(
                "repository.rest_url must be an http(s) URL, got '{}'",
                self.rest_url
            ));
        }
        if !self.ri_url.starts_with("http://") && !self.ri_url.starts_with("https://") {
            return Err(format!(
                "repository.ri_url must be an http(s) URL, got '{}'",
                self.ri_url
            ));
        }
        if self.collection_model.trim().is_empty() {
            return Err("repository.collection_model cannot be empty".to_string());
        }
        if self.compound_model.trim().is_empty() {
            return Err("repository.compound_model cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            rest_url: "http://localhost:8080/fedora/".to_string(),
            ri_url: "http://localhost:8080/fedora/risearch".to_string(),
            username: None,
            password: None,
            tls_verify: default_tls_verify(),
            collection_model: default_collection_model(),
            compound_model: default_compound_model(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Collection PID to export when none is given on the command line
    #[serde(default)]
    pub root_pid: Option<String>,

    /// Directory the export tree is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if let Some(pid) = &self.root_pid {
            if !pid.contains(':') {
                return Err(format!(
                    "export.root_pid '{pid}' is not a valid PID (expected namespace:id)"
                ));
            }
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root_pid: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory log files are written to
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tls_verify() -> bool {
    true
}

fn default_collection_model() -> String {
    "islandora:collectionCModel".to_string()
}

fn default_compound_model() -> String {
    "islandora:compoundCModel".to_string()
}

fn default_output_dir() -> String {
    "./export".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
