//! Flat Dublin Core dialect
//!
//! Dublin Core records are one namespace deep, so a column is just the
//! element's own aliased tag. Every element in the document is considered,
//! root included, in document order.

use super::columns::{aliased_tag, ColumnNamer, DC_NS};
use super::document::{XmlDocument, XmlElement};
use crate::core::table::Row;
use crate::domain::pid::Pid;

/// Flattens one Dublin Core record into a row keyed by `dc:`-aliased tags
///
/// The row always carries the owning `pid`. Elements with missing or
/// whitespace-only text contribute nothing.
pub fn flatten_dublin_core(doc: &XmlDocument, pid: &Pid) -> Row {
    let mut row = Row::new();
    row.insert("pid".to_string(), pid.to_string());
    let mut namer = ColumnNamer::new();
    visit(&doc.root, &mut row, &mut namer);
    row
}

fn visit(element: &XmlElement, row: &mut Row, namer: &mut ColumnNamer) {
    if !element.text.trim().is_empty() {
        let base = aliased_tag(element, DC_NS, "dc");
        let column = namer.assign(row, &base);
        row.insert(column, element.text.clone());
    }
    for child in &element.children {
        visit(child, row, namer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn pid() -> Pid {
        Pid::from_str("test:1").unwrap()
    }

    const RECORD: &str = r#"<oai_dc:dc
        xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
        xmlns:dc="http://purl.org/dc/elements/1.1/">
        <dc:title>Regional Survey</dc:title>
        <dc:creator>Smith, Jane</dc:creator>
        <dc:subject>A</dc:subject>
        <dc:subject>B</dc:subject>
        <dc:subject>C</dc:subject>
      </oai_dc:dc>"#;

    #[test]
    fn test_row_carries_pid() {
        let doc = XmlDocument::parse(RECORD).unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert_eq!(row.get("pid").map(String::as_str), Some("test:1"));
    }

    #[test]
    fn test_elements_become_aliased_columns() {
        let doc = XmlDocument::parse(RECORD).unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert_eq!(row.get("dc:title").map(String::as_str), Some("Regional Survey"));
        assert_eq!(row.get("dc:creator").map(String::as_str), Some("Smith, Jane"));
    }

    #[test]
    fn test_repeated_subjects_numbered_in_encounter_order() {
        let doc = XmlDocument::parse(RECORD).unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert_eq!(row.get("dc:subject").map(String::as_str), Some("A"));
        assert_eq!(row.get("dc:subject1").map(String::as_str), Some("B"));
        assert_eq!(row.get("dc:subject2").map(String::as_str), Some("C"));
    }

    #[test]
    fn test_whitespace_only_elements_skipped() {
        let doc = XmlDocument::parse(
            r#"<dc:dc xmlns:dc="http://purl.org/dc/elements/1.1/">
                 <dc:title>   </dc:title>
                 <dc:creator>Smith</dc:creator>
               </dc:dc>"#,
        )
        .unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert!(!row.contains_key("dc:title"));
        assert_eq!(row.get("dc:creator").map(String::as_str), Some("Smith"));
    }

    #[test]
    fn test_foreign_namespace_tag_kept_verbatim() {
        let doc = XmlDocument::parse(
            r#"<dc:dc xmlns:dc="http://purl.org/dc/elements/1.1/"
                      xmlns:x="http://example.org/local">
                 <x:shelf>Basement</x:shelf>
               </dc:dc>"#,
        )
        .unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert_eq!(
            row.get("{http://example.org/local}shelf").map(String::as_str),
            Some("Basement")
        );
    }

    #[test]
    fn test_empty_record_yields_pid_only() {
        let doc = XmlDocument::parse(
            r#"<dc:dc xmlns:dc="http://purl.org/dc/elements/1.1/"></dc:dc>"#,
        )
        .unwrap();
        let row = flatten_dublin_core(&doc, &pid());
        assert_eq!(row.len(), 1);
        assert!(row.contains_key("pid"));
    }
}
