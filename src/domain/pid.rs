//! Persistent identifier newtype with validation
//!
//! Repository objects are addressed by PIDs of the form `namespace:id`.
//! The newtype keeps PIDs from being mixed up with other strings and owns
//! the one transformation the rest of the code needs: turning a PID into a
//! filesystem-safe path segment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persistent identifier for one repository object
///
/// # Examples
///
/// ```
/// use folio::domain::pid::Pid;
/// use std::str::FromStr;
///
/// let pid = Pid::from_str("coccc:10504").unwrap();
/// assert_eq!(pid.as_str(), "coccc:10504");
/// assert_eq!(pid.path_segment(), "coccc_10504");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pid(String);

impl Pid {
    /// Creates a new Pid from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the PID is empty or missing the `namespace:id`
    /// separator.
    pub fn new(pid: impl Into<String>) -> Result<Self, String> {
        let pid = pid.into();
        if pid.trim().is_empty() {
            return Err("PID cannot be empty".to_string());
        }
        if !pid.contains(':') {
            return Err(format!(
                "Invalid PID '{pid}'. Expected format: namespace:id"
            ));
        }
        Ok(Self(pid))
    }

    /// Returns the PID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The PID rendered safe for use as a directory or file name component.
    /// Colons are not portable path characters, so they become underscores.
    pub fn path_segment(&self) -> String {
        self.0.replace(':', "_")
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Pid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Pid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_creation() {
        let pid = Pid::new("islandora:root").unwrap();
        assert_eq!(pid.as_str(), "islandora:root");
    }

    #[test]
    fn test_empty_pid_rejected() {
        assert!(Pid::new("").is_err());
        assert!(Pid::new("   ").is_err());
    }

    #[test]
    fn test_pid_without_namespace_rejected() {
        let err = Pid::new("10504").unwrap_err();
        assert!(err.contains("namespace:id"));
    }

    #[test]
    fn test_path_segment_replaces_colons() {
        let pid = Pid::new("coccc:10504").unwrap();
        assert_eq!(pid.path_segment(), "coccc_10504");
    }

    #[test]
    fn test_from_str_and_display_round_trip() {
        let pid: Pid = "test:1".parse().unwrap();
        assert_eq!(pid.to_string(), "test:1");
    }
}
