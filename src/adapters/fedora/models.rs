//! Wire formats for the repository's REST and resource-index endpoints

use crate::domain::errors::FolioError;
use crate::domain::result::Result;
use crate::domain::{DatastreamDescriptor, Pid};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Deserialize;
use std::collections::HashMap;

/// Prefix the resource index puts in front of PIDs in result IRIs
pub const FEDORA_IRI_PREFIX: &str = "info:fedora/";

/// JSON body of a resource-index tuple query response
///
/// Each result row maps SPARQL variable names to IRI values such as
/// `info:fedora/coccc:10504`.
#[derive(Debug, Deserialize)]
pub struct TupleResponse {
    /// Result rows, keyed by variable name
    #[serde(default)]
    pub results: Vec<HashMap<String, String>>,
}

impl TupleResponse {
    /// Raw values bound to one variable across all rows
    pub fn values<'a>(&'a self, var: &'a str) -> impl Iterator<Item = &'a str> {
        self.results
            .iter()
            .filter_map(move |row| row.get(var).map(String::as_str))
    }

    /// PIDs bound to one variable, taken from the final IRI segment.
    /// Values that don't form a valid PID are logged and dropped.
    pub fn pids(&self, var: &str) -> Vec<Pid> {
        self.values(var)
            .filter_map(|iri| {
                let raw = iri.rsplit('/').next().unwrap_or(iri);
                match Pid::new(raw) {
                    Ok(pid) => Some(pid),
                    Err(e) => {
                        tracing::warn!(
                            iri = iri,
                            error = %e,
                            "Skipping invalid PID in resource index response"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

/// Parses the XML datastream manifest returned by
/// `objects/{pid}/datastreams?format=xml`
pub fn parse_datastream_manifest(xml: &str) -> Result<Vec<DatastreamDescriptor>> {
    let mut reader = Reader::from_str(xml);
    let mut descriptors = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"datastream" => {
                let mut id = String::new();
                let mut label = String::new();
                let mut mime_type = String::new();
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| FolioError::Parse(e.to_string()))?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| FolioError::Parse(e.to_string()))?
                        .into_owned();
                    match attr.key.local_name().as_ref() {
                        b"dsid" => id = value,
                        b"label" => label = value,
                        b"mimeType" => mime_type = value,
                        _ => {}
                    }
                }
                if id.is_empty() {
                    return Err(FolioError::Parse(
                        "datastream entry missing dsid attribute".to_string(),
                    ));
                }
                descriptors.push(DatastreamDescriptor {
                    id,
                    label,
                    mime_type,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_response_pids() {
        let response: TupleResponse = serde_json::from_str(
            r#"{"results": [
                {"s": "info:fedora/coccc:10504"},
                {"s": "info:fedora/coccc:10505"}
            ]}"#,
        )
        .unwrap();
        let pids = response.pids("s");
        assert_eq!(pids.len(), 2);
        assert_eq!(pids[0].as_str(), "coccc:10504");
    }

    #[test]
    fn test_tuple_response_drops_invalid_pids() {
        let response: TupleResponse = serde_json::from_str(
            r#"{"results": [
                {"s": "info:fedora/not-a-pid"},
                {"s": "info:fedora/ok:1"}
            ]}"#,
        )
        .unwrap();
        let pids = response.pids("s");
        assert_eq!(pids.len(), 1);
        assert_eq!(pids[0].as_str(), "ok:1");
    }

    #[test]
    fn test_tuple_response_missing_results_key() {
        let response: TupleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.pids("s").is_empty());
    }

    #[test]
    fn test_parse_datastream_manifest() {
        let xml = r#"<objectDatastreams xmlns="http://www.fedora.info/definitions/1/0/access/"
                        pid="test:1" baseURL="http://localhost:8080/fedora/">
              <datastream dsid="DC" label="Dublin Core Record" mimeType="text/xml"/>
              <datastream dsid="TN" label="Thumbnail" mimeType="image/jpeg"/>
              <datastream dsid="OBJ" label="scan" mimeType="image/tiff"/>
            </objectDatastreams>"#;
        let descriptors = parse_datastream_manifest(xml).unwrap();
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].id, "DC");
        assert_eq!(descriptors[1].label, "Thumbnail");
        assert_eq!(descriptors[2].mime_type, "image/tiff");
    }

    #[test]
    fn test_parse_manifest_missing_dsid_is_error() {
        let xml = r#"<objectDatastreams><datastream label="x" mimeType="y"/></objectDatastreams>"#;
        assert!(parse_datastream_manifest(xml).is_err());
    }

    #[test]
    fn test_parse_manifest_empty_document() {
        let xml = r#"<objectDatastreams pid="test:1"></objectDatastreams>"#;
        assert!(parse_datastream_manifest(xml).unwrap().is_empty());
    }
}
