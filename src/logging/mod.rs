//! Logging and observability
//!
//! Structured logging with configurable levels, console output, and optional
//! JSON file logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use folio::logging::init_logging;
//! use folio::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Export started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
