//! Domain error types
//!
//! The error hierarchy for folio. All errors are domain-specific and don't
//! expose third-party types.

use thiserror::Error;

/// Main folio error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Repository-related errors (REST or resource index)
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Export failure for an essential resource. Carries a short title and a
    /// detailed body (status, URL, response text) for diagnosis. Fatal to the
    /// enclosing collection subtree.
    #[error("{title}")]
    Export {
        /// Short description of what failed
        title: String,
        /// Detailed diagnostic body
        detail: String,
    },

    /// Malformed metadata or manifest document
    #[error("Parse error: {0}")]
    Parse(String),

    /// A membership edge led back into an already-visited collection
    #[error("Cycle detected in collection graph at {0}")]
    CycleDetected(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Build an export error from a title and a detailed body
    pub fn export(title: impl Into<String>, detail: impl Into<String>) -> Self {
        FolioError::Export {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Repository-specific errors
///
/// Errors that occur when talking to the repository's REST endpoint or its
/// resource index. These don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Failed to connect to the repository
    #[error("Failed to connect to repository: {0}")]
    ConnectionFailed(String),

    /// Non-success status for an essential resource
    #[error("Server returned {status} for {url}: {body}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body
        body: String,
    },

    /// Resource index query failed
    #[error("Resource index query failed: {0}")]
    QueryFailed(String),

    /// Response could not be interpreted
    #[error("Invalid response from repository: {0}")]
    InvalidResponse(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for FolioError {
    fn from(err: csv::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

// Conversion from quick-xml errors
impl From<quick_xml::Error> for FolioError {
    fn from(err: quick_xml::Error) -> Self {
        FolioError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folio_error_display() {
        let err = FolioError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_export_error_title_is_display() {
        let err = FolioError::export("Failed to expand pid x:1", "status 500");
        assert_eq!(err.to_string(), "Failed to expand pid x:1");
        if let FolioError::Export { detail, .. } = err {
            assert_eq!(detail, "status 500");
        } else {
            panic!("Expected Export error");
        }
    }

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::ConnectionFailed("refused".to_string());
        let err: FolioError = repo_err.into();
        assert!(matches!(err, FolioError::Repository(_)));
    }

    #[test]
    fn test_server_error_carries_context() {
        let err = RepositoryError::ServerError {
            status: 502,
            url: "http://fedora.example.edu/objects/x:1".to_string(),
            body: "bad gateway".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("objects/x:1"));
        assert!(text.contains("bad gateway"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: FolioError = toml_err.into();
        assert!(matches!(err, FolioError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = FolioError::Parse("bad xml".to_string());
        let _: &dyn std::error::Error = &err;
        let repo_err = RepositoryError::NotFound("x:1".to_string());
        let _: &dyn std::error::Error = &repo_err;
    }
}
