//! Recursive collection traversal
//!
//! Walks a collection subtree depth-first: each collection frame owns a
//! fresh pair of metadata tables, every member contributes a row to the
//! parent's tables before being classified, and the frame's tables are
//! flushed to CSV when the subtree completes. Requests are strictly
//! sequential; tables never cross recursion frames, so there is no shared
//! mutable state to synchronize.

use crate::adapters::Repository;
use crate::core::export::resolver::{self, Disposition};
use crate::core::export::summary::{ExportIssue, ExportSummary};
use crate::core::flatten::{extract_title, flatten_dublin_core, flatten_mods, XmlDocument};
use crate::core::table::CollectionTables;
use crate::domain::{Dialect, FolioError, Pid, Result};
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Drives the export of collection subtrees and single objects
pub struct ExportWalker {
    repository: Arc<dyn Repository>,
    collection_model: String,
    compound_model: String,
}

impl ExportWalker {
    /// Creates a walker over the given repository
    pub fn new(
        repository: Arc<dyn Repository>,
        collection_model: impl Into<String>,
        compound_model: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            collection_model: collection_model.into(),
            compound_model: compound_model.into(),
        }
    }

    /// Exports a collection subtree rooted at `pid` into `output_dir`
    ///
    /// # Errors
    ///
    /// Fails when an essential resource (membership query, datastream
    /// manifest, constituent expansion) cannot be retrieved, or when the
    /// membership graph leads back into an already-visited collection.
    pub async fn export_collection(&self, pid: &Pid, output_dir: &Path) -> Result<ExportSummary> {
        let started = Instant::now();
        let mut summary = ExportSummary::new();
        let mut visited = HashSet::new();

        tracing::info!(pid = %pid, output = %output_dir.display(), "Starting collection export");
        let title = self.probe_title(pid, &mut summary).await?;
        self.walk_collection(pid, output_dir, title, &mut visited, &mut summary)
            .await?;

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Exports a single non-collection object directly into `output_dir`
    ///
    /// Objects that declare a compound parent are skipped entirely; they are
    /// exported as part of that parent's expansion instead.
    pub async fn export_object(&self, pid: &Pid, output_dir: &Path) -> Result<ExportSummary> {
        let started = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(pid = %pid, output = %output_dir.display(), "Starting object export");
        let title = self.probe_title(pid, &mut summary).await?;
        self.export_noncollection(pid, output_dir, title, &mut summary)
            .await?;

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    fn walk_collection<'a>(
        &'a self,
        pid: &'a Pid,
        parent_dir: &'a Path,
        title: Option<String>,
        visited: &'a mut HashSet<Pid>,
        summary: &'a mut ExportSummary,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            if !visited.insert(pid.clone()) {
                return Err(FolioError::CycleDetected(pid.to_string()));
            }

            let dir_name = title
                .as_deref()
                .map(resolver::sanitize_file_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| pid.path_segment());
            let dir = parent_dir.join(dir_name);
            summary.collections_visited += 1;
            tracing::info!(pid = %pid, dir = %dir.display(), "Entering collection");

            let mut tables = CollectionTables::new();

            // The collection object may carry its own thumbnail or cover
            // image; those land in the collection directory itself.
            self.export_datastreams(pid, &dir, title.as_deref(), summary)
                .await?;

            let members = self.repository.members_of(pid).await.map_err(|e| {
                FolioError::export(
                    format!("Failed to expand members of collection {pid}"),
                    e.to_string(),
                )
            })?;
            tracing::info!(pid = %pid, members = members.len(), "Expanding members");

            for member in &members {
                // Every member contributes metadata to the parent's tables,
                // sub-collections included.
                let member_title = self
                    .accumulate_metadata(member, &mut tables, summary)
                    .await?;

                if self.has_model(member, &self.collection_model).await? {
                    self.walk_collection(member, &dir, member_title, visited, summary)
                        .await?;
                } else {
                    self.export_noncollection(member, &dir, member_title, summary)
                        .await?;
                }
            }

            summary.csv_files_written += tables.flush(&dir)? as usize;
            tracing::info!(pid = %pid, "Collection export done");
            Ok(())
        }
        .boxed()
    }

    /// Exports one non-collection object: a constituent declaration defers it
    /// to its compound parent, a compound model expands it, anything else is
    /// a simple object exported into its own PID-named subdirectory.
    async fn export_noncollection(
        &self,
        pid: &Pid,
        parent_dir: &Path,
        title: Option<String>,
        summary: &mut ExportSummary,
    ) -> Result<()> {
        let parents = self.repository.constituent_parents(pid).await?;
        if let Some(parent) = parents.first() {
            tracing::debug!(
                pid = %pid,
                parent = %parent,
                "Object is a constituent, deferring to its compound parent"
            );
            summary.constituents_deferred += 1;
            return Ok(());
        }

        if self.has_model(pid, &self.compound_model).await? {
            self.export_compound(pid, parent_dir, summary).await
        } else {
            let dir = parent_dir.join(pid.path_segment());
            self.export_datastreams(pid, &dir, title.as_deref(), summary)
                .await
        }
    }

    /// Expands a compound object: every constituent's datastreams are written
    /// flat into the compound's directory. Constituents contribute no
    /// metadata rows of their own.
    async fn export_compound(
        &self,
        pid: &Pid,
        parent_dir: &Path,
        summary: &mut ExportSummary,
    ) -> Result<()> {
        let constituents = self.repository.constituents_of(pid).await.map_err(|e| {
            FolioError::export(
                format!("Could not retrieve constituents of {pid}"),
                e.to_string(),
            )
        })?;

        let dir = parent_dir.join(pid.path_segment());
        summary.compounds_expanded += 1;
        tracing::info!(
            pid = %pid,
            constituents = constituents.len(),
            dir = %dir.display(),
            "Expanding compound object"
        );

        for constituent in &constituents {
            let title = self.probe_title(constituent, summary).await?;
            self.export_datastreams(constituent, &dir, title.as_deref(), summary)
                .await?;
        }
        Ok(())
    }

    /// Exports every content datastream of one object into `dir`
    async fn export_datastreams(
        &self,
        pid: &Pid,
        dir: &Path,
        title: Option<&str>,
        summary: &mut ExportSummary,
    ) -> Result<()> {
        let descriptors = self.repository.datastreams(pid).await.map_err(|e| {
            FolioError::export(
                format!("Failed to retrieve datastreams for {pid}"),
                e.to_string(),
            )
        })?;

        fs::create_dir_all(dir)?;

        for descriptor in &descriptors {
            let file_name = match resolver::resolve(descriptor, title) {
                Disposition::Skip => continue,
                Disposition::Export { file_name } => file_name,
            };
            match self.repository.fetch_datastream(pid, &descriptor.id).await? {
                Some(bytes) => {
                    let path = dir.join(&file_name);
                    fs::write(&path, &bytes)?;
                    summary.files_written += 1;
                    tracing::info!(
                        pid = %pid,
                        dsid = %descriptor.id,
                        path = %path.display(),
                        size = bytes.len(),
                        "Exported datastream"
                    );
                }
                None => {
                    summary.datastreams_skipped += 1;
                    summary.add_issue(ExportIssue::new(
                        pid.as_str(),
                        format!("datastream {} body could not be fetched", descriptor.id),
                    ));
                }
            }
        }

        summary.objects_exported += 1;
        Ok(())
    }

    /// Fetches and flattens both metadata dialects for one member into the
    /// parent collection's tables. Absent or unparsable records are absorbed;
    /// the MODS title is returned for filename derivation.
    async fn accumulate_metadata(
        &self,
        pid: &Pid,
        tables: &mut CollectionTables,
        summary: &mut ExportSummary,
    ) -> Result<Option<String>> {
        if let Some(xml) = self
            .repository
            .fetch_metadata(pid, Dialect::DublinCore)
            .await?
        {
            match XmlDocument::parse(&xml) {
                Ok(doc) => {
                    tables.dublin_core.add_row(flatten_dublin_core(&doc, pid));
                    summary.dublin_core_rows += 1;
                }
                Err(e) => self.record_parse_failure(pid, Dialect::DublinCore, &e, summary),
            }
        }

        let mut title = None;
        if let Some(xml) = self.repository.fetch_metadata(pid, Dialect::Mods).await? {
            match XmlDocument::parse(&xml) {
                Ok(doc) => {
                    let record = flatten_mods(&doc, pid);
                    title = record.title;
                    tables.mods.add_row(record.row);
                    summary.mods_rows += 1;
                }
                Err(e) => self.record_parse_failure(pid, Dialect::Mods, &e, summary),
            }
        }

        Ok(title)
    }

    /// Pulls the MODS title for an object outside metadata accumulation
    /// (collection roots and compound constituents)
    async fn probe_title(
        &self,
        pid: &Pid,
        summary: &mut ExportSummary,
    ) -> Result<Option<String>> {
        let Some(xml) = self.repository.fetch_metadata(pid, Dialect::Mods).await? else {
            return Ok(None);
        };
        match XmlDocument::parse(&xml) {
            Ok(doc) => Ok(extract_title(&doc)),
            Err(e) => {
                self.record_parse_failure(pid, Dialect::Mods, &e, summary);
                Ok(None)
            }
        }
    }

    async fn has_model(&self, pid: &Pid, model: &str) -> Result<bool> {
        let models = self.repository.models_of(pid).await?;
        Ok(models.iter().any(|m| m == model))
    }

    fn record_parse_failure(
        &self,
        pid: &Pid,
        dialect: Dialect,
        error: &FolioError,
        summary: &mut ExportSummary,
    ) {
        tracing::warn!(
            pid = %pid,
            dialect = %dialect,
            error = %error,
            "Skipping unparsable metadata record"
        );
        summary.parse_failures += 1;
        summary.add_issue(ExportIssue::new(
            pid.as_str(),
            format!("unparsable {dialect} record: {error}"),
        ));
    }
}
