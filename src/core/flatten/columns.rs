//! Column naming for flattened rows
//!
//! Tags are rendered with the dialect's namespace URI rewritten to a short
//! alias; tags in any other namespace keep the `{uri}local` form. Repeated
//! tags within one row get a numeric suffix in encounter order: `name`,
//! `name1`, `name2`, and so on.

use super::document::XmlElement;
use std::collections::HashMap;

/// Dublin Core element namespace
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// MODS version 3 namespace
pub const MODS_NS: &str = "http://www.loc.gov/mods/v3";

/// Renders an element tag with the given namespace aliased to a short prefix
pub fn aliased_tag(element: &XmlElement, ns_uri: &str, alias: &str) -> String {
    match element.ns.as_deref() {
        Some(uri) if uri == ns_uri => format!("{alias}:{}", element.local),
        Some(uri) => format!("{{{uri}}}{}", element.local),
        None => element.local.clone(),
    }
}

/// Assigns unique column names within one row
///
/// Tracks how many times each base name has been seen; the first occurrence
/// keeps the bare name and the n-th gets the suffix `n`. When a generated
/// name clashes with a column that already exists in the row (a tag that
/// itself ends in a digit), the counter advances until the name is free, so
/// the assignment is injective within the row.
#[derive(Debug, Default)]
pub struct ColumnNamer {
    counts: HashMap<String, u32>,
}

impl ColumnNamer {
    /// Creates a namer with no occurrences recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a column name for `base` that is not yet present in `row`
    pub fn assign(&mut self, row: &HashMap<String, String>, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        loop {
            let candidate = if *count == 0 {
                base.to_string()
            } else {
                format!("{base}{count}")
            };
            *count += 1;
            if !row.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
