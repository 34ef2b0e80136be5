//! Domain models and types for folio.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`Pid`])
//! - **Datastream types** ([`DatastreamDescriptor`], [`Dialect`])
//! - **Error types** ([`FolioError`], [`RepositoryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust,no_run
//! use folio::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = folio::config::load_config("folio.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```

pub mod datastream;
pub mod errors;
pub mod pid;
pub mod result;

// Re-export commonly used types for convenience
pub use datastream::{DatastreamDescriptor, Dialect};
pub use errors::{FolioError, RepositoryError};
pub use pid::Pid;
pub use result::Result;
