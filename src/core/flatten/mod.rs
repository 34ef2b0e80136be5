//! Metadata record flattening
//!
//! Converts one nested XML metadata document into a flat, uniquely-keyed row
//! suitable for a tabular file. Two dialects are supported: flat Dublin Core
//! ([`dublin_core`]) and nested, `type`-qualified MODS ([`mods`]). Both share
//! the [`columns`] naming rules and the [`document`] element tree.

pub mod columns;
pub mod document;
pub mod dublin_core;
pub mod mods;

pub use document::{XmlDocument, XmlElement};
pub use dublin_core::flatten_dublin_core;
pub use mods::{extract_title, flatten_mods, ModsRecord};
