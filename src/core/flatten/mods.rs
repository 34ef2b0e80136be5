//! Nested MODS dialect
//!
//! MODS records nest arbitrarily deep, so a column name is the element's
//! whole ancestor path: each ancestor's aliased tag (with a `[type=…]`
//! qualifier when the ancestor carries a `type` attribute) joined by ` > `,
//! ending in the element's own qualified tag. The record's title doubles as
//! the preferred export file name for the object's primary content, so the
//! flattener also surfaces it.

use super::columns::{aliased_tag, ColumnNamer, MODS_NS};
use super::document::{XmlDocument, XmlElement};
use crate::core::table::Row;
use crate::domain::pid::Pid;

/// A flattened MODS record: the row plus the document title, when present
#[derive(Debug)]
pub struct ModsRecord {
    /// Flattened row including the `pid` column
    pub row: Row,

    /// Text of `mods:titleInfo/mods:title`, if present and non-blank
    pub title: Option<String>,
}

/// Flattens one MODS record into a path-keyed row
pub fn flatten_mods(doc: &XmlDocument, pid: &Pid) -> ModsRecord {
    let mut row = Row::new();
    let mut namer = ColumnNamer::new();
    let mut ancestors: Vec<String> = Vec::new();
    visit(&doc.root, &mut ancestors, &mut row, &mut namer);
    row.insert("pid".to_string(), pid.to_string());
    ModsRecord {
        row,
        title: extract_title(doc),
    }
}

/// Title at the fixed `mods:titleInfo/mods:title` path, if non-blank
pub fn extract_title(doc: &XmlDocument) -> Option<String> {
    doc.find_path(MODS_NS, &["titleInfo", "title"])
        .map(|el| el.text.clone())
        .filter(|text| !text.trim().is_empty())
}

fn visit(
    element: &XmlElement,
    ancestors: &mut Vec<String>,
    row: &mut Row,
    namer: &mut ColumnNamer,
) {
    if !element.text.trim().is_empty() {
        let mut base = String::new();
        for ancestor in ancestors.iter() {
            base.push_str(ancestor);
            base.push_str(" > ");
        }
        base.push_str(&qualified_tag(element));
        let column = namer.assign(row, &base);
        row.insert(column, element.text.clone());
    }
    ancestors.push(qualified_tag(element));
    for child in &element.children {
        visit(child, ancestors, row, namer);
    }
    ancestors.pop();
}

fn qualified_tag(element: &XmlElement) -> String {
    let mut tag = aliased_tag(element, MODS_NS, "mods");
    if let Some(type_attr) = &element.type_attr {
        tag.push_str(&format!("[type={type_attr}]"));
    }
    tag
}
