//! Configuration management for folio.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! folio uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `FOLIO_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [repository]
//! rest_url = "https://fedora.example.edu/fedora/"
//! ri_url = "https://fedora.example.edu/fedora/risearch"
//! username = "fedoraAdmin"
//! password = "${FOLIO_REPOSITORY_PASSWORD}"
//!
//! [export]
//! root_pid = "coccc:root"
//! output_dir = "./export"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("folio.toml")?;
//! println!("Repository: {}", config.repository.rest_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, FolioConfig, LoggingConfig, RepositoryConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
