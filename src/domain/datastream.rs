//! Datastream descriptors and metadata dialects
//!
//! An object carries an unordered set of datastreams. Most are exportable
//! content; the `DC` and `MODS` streams are descriptive metadata consumed by
//! the flatteners instead of being written to disk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One content stream attached to a repository object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastreamDescriptor {
    /// Datastream identifier, e.g. `OBJ`, `TN`, `DC`, `MODS`
    pub id: String,

    /// Human-readable label, may be empty
    pub label: String,

    /// MIME type of the stream content
    pub mime_type: String,
}

impl DatastreamDescriptor {
    /// Creates a descriptor
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Whether this stream is a descriptive metadata record rather than
    /// exportable content
    pub fn is_descriptive_metadata(&self) -> bool {
        self.id.starts_with(Dialect::DublinCore.datastream_id())
            || self.id.starts_with(Dialect::Mods.datastream_id())
    }
}

/// One of the two supported metadata schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Flat Dublin Core records, one namespace depth
    DublinCore,
    /// Nested MODS records with `type`-qualified elements
    Mods,
}

impl Dialect {
    /// The reserved datastream ID holding this dialect's record
    pub fn datastream_id(&self) -> &'static str {
        match self {
            Dialect::DublinCore => "DC",
            Dialect::Mods => "MODS",
        }
    }

    /// Name of the per-collection CSV file for this dialect
    pub fn csv_file_name(&self) -> &'static str {
        match self {
            Dialect::DublinCore => "dublin_core.csv",
            Dialect::Mods => "mods.csv",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::DublinCore => write!(f, "Dublin Core"),
            Dialect::Mods => write!(f, "MODS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_streams_detected() {
        assert!(DatastreamDescriptor::new("DC", "Dublin Core Record", "text/xml")
            .is_descriptive_metadata());
        assert!(DatastreamDescriptor::new("MODS", "MODS Record", "text/xml")
            .is_descriptive_metadata());
        assert!(!DatastreamDescriptor::new("OBJ", "scan.tiff", "image/tiff")
            .is_descriptive_metadata());
        assert!(!DatastreamDescriptor::new("TN", "", "image/jpeg").is_descriptive_metadata());
    }

    #[test]
    fn test_dialect_datastream_ids() {
        assert_eq!(Dialect::DublinCore.datastream_id(), "DC");
        assert_eq!(Dialect::Mods.datastream_id(), "MODS");
    }

    #[test]
    fn test_dialect_csv_file_names() {
        assert_eq!(Dialect::DublinCore.csv_file_name(), "dublin_core.csv");
        assert_eq!(Dialect::Mods.csv_file_name(), "mods.csv");
    }
}
