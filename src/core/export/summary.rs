//! Export summary and reporting

use std::time::Duration;

/// A non-fatal problem recorded during a run
#[derive(Debug, Clone)]
pub struct ExportIssue {
    /// PID the issue was observed on
    pub pid: String,

    /// What happened
    pub message: String,
}

impl ExportIssue {
    /// Creates a new issue record
    pub fn new(pid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            message: message.into(),
        }
    }
}

/// Summary of one export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Collections entered, the root included
    pub collections_visited: usize,

    /// Objects whose datastreams were exported (constituents included)
    pub objects_exported: usize,

    /// Compound objects expanded into constituents
    pub compounds_expanded: usize,

    /// Objects skipped because they are constituents of a compound parent
    pub constituents_deferred: usize,

    /// Content files written to disk
    pub files_written: usize,

    /// Individual datastream bodies skipped after a failed fetch
    pub datastreams_skipped: usize,

    /// Dublin Core rows accumulated
    pub dublin_core_rows: usize,

    /// MODS rows accumulated
    pub mods_rows: usize,

    /// Metadata records dropped because they could not be parsed
    pub parse_failures: usize,

    /// CSV files written
    pub csv_files_written: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Non-fatal issues recorded along the way
    pub issues: Vec<ExportIssue>,
}

impl ExportSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records a non-fatal issue
    pub fn add_issue(&mut self, issue: ExportIssue) {
        self.issues.push(issue);
    }

    /// Whether the run completed without recording any issue
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            collections = self.collections_visited,
            objects = self.objects_exported,
            compounds = self.compounds_expanded,
            files = self.files_written,
            csv_files = self.csv_files_written,
            dublin_core_rows = self.dublin_core_rows,
            mods_rows = self.mods_rows,
            duration_secs = self.duration.as_secs(),
            "Export completed"
        );

        if !self.issues.is_empty() {
            tracing::warn!(
                issue_count = self.issues.len(),
                "Export completed with non-fatal issues"
            );
            for issue in &self.issues {
                tracing::warn!(pid = %issue.pid, message = %issue.message, "Export issue");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_clean() {
        let summary = ExportSummary::new();
        assert!(summary.is_clean());
        assert_eq!(summary.files_written, 0);
    }

    #[test]
    fn test_issues_mark_summary_dirty() {
        let mut summary = ExportSummary::new();
        summary.add_issue(ExportIssue::new("x:1", "unparsable MODS record"));
        assert!(!summary.is_clean());
        assert_eq!(summary.issues.len(), 1);
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_secs(3));
        assert_eq!(summary.duration.as_secs(), 3);
    }
}
