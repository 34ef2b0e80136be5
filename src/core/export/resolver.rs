//! Datastream export resolution
//!
//! Decides, per datastream, whether it is exported at all and what the
//! output file is called. Descriptive metadata streams are consumed by the
//! flatteners instead; thumbnails get a fixed name; primary content prefers
//! the object's title over the stream label.

use crate::domain::DatastreamDescriptor;

/// Outcome of resolving one datastream descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Descriptive metadata, never exported as a file
    Skip,

    /// Export under the given file name (extension included)
    Export {
        /// Sanitized file name with MIME-derived extension
        file_name: String,
    },
}

/// Resolves a descriptor to a disposition, first match wins:
/// metadata streams are skipped, `TN*` becomes `thumbnail`, `OBJ*` takes the
/// derived title then the label then the ID, and anything else keeps its ID.
pub fn resolve(descriptor: &DatastreamDescriptor, title: Option<&str>) -> Disposition {
    if descriptor.is_descriptive_metadata() {
        return Disposition::Skip;
    }

    let base = if descriptor.id.starts_with("TN") {
        "thumbnail".to_string()
    } else if descriptor.id.starts_with("OBJ") {
        match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ if !descriptor.label.is_empty() => descriptor.label.clone(),
            _ => descriptor.id.clone(),
        }
    } else {
        descriptor.id.clone()
    };

    let base = strip_media_suffixes(&sanitize_file_name(&base));
    let extension = extension_for_mime(&descriptor.mime_type);
    Disposition::Export {
        file_name: format!("{base}{extension}"),
    }
}

/// Reduces a label or title to a safe file name: characters outside
/// `[A-Za-z0-9 ._()-]` are dropped, then spaces become underscores
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || " ._()-".contains(*c))
        .collect::<String>()
        .replace(' ', "_")
}

/// Removes embedded `.jpg`/`.mp3` fragments so a label that already carries
/// an extension doesn't produce a double-extensioned file
fn strip_media_suffixes(name: &str) -> String {
    name.replace(".jpg", "").replace(".mp3", "")
}

/// Derives a file extension from a MIME type's subtype, honoring
/// structured-syntax suffixes (`image/svg+xml` becomes `.xml`)
pub fn extension_for_mime(mime_type: &str) -> String {
    if mime_type == "application/octet-stream" {
        return ".bin".to_string();
    }
    let subtype = mime_type.rsplit('/').next().unwrap_or(mime_type);
    let last = subtype.rsplit('+').next().unwrap_or(subtype);
    format!(".{last}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn descriptor(id: &str, label: &str, mime: &str) -> DatastreamDescriptor {
        DatastreamDescriptor::new(id, label, mime)
    }

    #[test_case("DC" ; "dublin core stream")]
    #[test_case("MODS" ; "mods stream")]
    #[test_case("DC.0" ; "versioned dublin core stream")]
    fn test_metadata_streams_skipped(id: &str) {
        let d = descriptor(id, "some label", "text/xml");
        assert_eq!(resolve(&d, Some("Title")), Disposition::Skip);
    }

    #[test]
    fn test_thumbnail_name_fixed_regardless_of_label() {
        let d = descriptor("TN001", "cover scan.jpg", "image/jpeg");
        assert_eq!(
            resolve(&d, Some("A Title")),
            Disposition::Export {
                file_name: "thumbnail.jpeg".to_string()
            }
        );
    }

    #[test]
    fn test_obj_prefers_title() {
        let d = descriptor("OBJ", "scan.tiff", "image/tiff");
        assert_eq!(
            resolve(&d, Some("Regional Survey")),
            Disposition::Export {
                file_name: "Regional_Survey.tiff".to_string()
            }
        );
    }

    #[test]
    fn test_obj_falls_back_to_label() {
        let d = descriptor("OBJ", "page one", "image/tiff");
        assert_eq!(
            resolve(&d, None),
            Disposition::Export {
                file_name: "page_one.tiff".to_string()
            }
        );
    }

    #[test]
    fn test_obj_falls_back_to_id() {
        let d = descriptor("OBJ", "", "application/pdf");
        assert_eq!(
            resolve(&d, None),
            Disposition::Export {
                file_name: "OBJ.pdf".to_string()
            }
        );
    }

    #[test]
    fn test_other_streams_named_by_id() {
        let d = descriptor("PROXY_MP3", "listen copy", "audio/mpeg");
        assert_eq!(
            resolve(&d, Some("Title")),
            Disposition::Export {
                file_name: "PROXY_MP3.mpeg".to_string()
            }
        );
    }

    #[test_case("a b c", "a_b_c" ; "spaces to underscores")]
    #[test_case("odd:name/with*chars?", "oddnamewithchars" ; "invalid chars dropped")]
    #[test_case("keep_-.()chars", "keep_-.()chars" ; "allowed punctuation kept")]
    fn test_sanitize_file_name(input: &str, expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn test_embedded_jpg_suffix_stripped() {
        let d = descriptor("OBJ", "portrait.jpg", "image/jpeg");
        assert_eq!(
            resolve(&d, None),
            Disposition::Export {
                file_name: "portrait.jpeg".to_string()
            }
        );
    }

    #[test_case("image/jpeg", ".jpeg")]
    #[test_case("image/svg+xml", ".xml")]
    #[test_case("application/pdf", ".pdf")]
    #[test_case("application/octet-stream", ".bin")]
    #[test_case("audio/mpeg", ".mpeg")]
    fn test_extension_for_mime(mime: &str, expected: &str) {
        assert_eq!(extension_for_mime(mime), expected);
    }
}
