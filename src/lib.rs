// folio - Fedora Repository Export Tool
// Licensed under the MIT License

//! # folio - Fedora Repository Export Tool
//!
//! folio walks a Fedora 3 digital repository starting at a collection,
//! exports each object's content datastreams into a directory tree that
//! mirrors the collection hierarchy, and writes per-collection CSV tables of
//! flattened bibliographic metadata in two dialects (flat Dublin Core and
//! nested MODS).
//!
//! ## Overview
//!
//! One run of the exporter:
//! - **Expands** a collection into its members through the resource index
//! - **Classifies** each member as sub-collection, compound object, or
//!   simple object
//! - **Flattens** each member's metadata records into uniquely-keyed rows
//! - **Exports** content datastreams with title-derived file names
//! - **Serializes** the accumulated rows to sparse CSV tables per collection
//!
//! ## Architecture
//!
//! folio follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (flattening, tables, traversal)
//! - [`adapters`] - Repository access (REST + resource index)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::adapters::fedora::FedoraClient;
//! use folio::config::load_config;
//! use folio::core::export::ExportWalker;
//! use folio::domain::Pid;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("folio.toml")?;
//!     let client = FedoraClient::new(&config.repository)?;
//!     let walker = ExportWalker::new(
//!         Arc::new(client),
//!         config.repository.collection_model.as_str(),
//!         config.repository.compound_model.as_str(),
//!     );
//!
//!     let root = Pid::new("coccc:root")?;
//!     let summary = walker
//!         .export_collection(&root, Path::new(&config.export.output_dir))
//!         .await?;
//!
//!     println!("Wrote {} files", summary.files_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failures of essential resources (membership queries, datastream
//! manifests) abort the enclosing collection subtree with a titled error
//! carrying the diagnostic detail. Everything else degrades: absent metadata
//! records, unparsable documents, and failed datastream bodies are logged,
//! counted in the run summary, and skipped.
//!
//! ## Logging
//!
//! folio uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! tracing::info!(pid = "coccc:10504", "Entering collection");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
