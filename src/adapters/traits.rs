//! Repository access trait
//!
//! The traversal controller only needs a handful of queries against the
//! repository; this trait is that seam. The production implementation is
//! [`crate::adapters::fedora::FedoraClient`]; tests substitute in-memory
//! fixtures.
//!
//! Failure semantics differ per method and matter to callers:
//! datastream manifests and relationship expansions are essential (an error
//! aborts the enclosing subtree), individual datastream bodies and metadata
//! documents degrade to `None`, and content-model probes degrade to an empty
//! list.

use crate::domain::{DatastreamDescriptor, Dialect, Pid, Result};
use async_trait::async_trait;

/// Read-only access to a repository's objects and relationship graph
#[async_trait]
pub trait Repository: Send + Sync {
    /// The object's datastream manifest. Non-success is a hard failure for
    /// this PID's export.
    async fn datastreams(&self, pid: &Pid) -> Result<Vec<DatastreamDescriptor>>;

    /// One datastream's bytes, or `None` when the body could not be fetched
    /// (skip semantics, never fatal).
    async fn fetch_datastream(&self, pid: &Pid, dsid: &str) -> Result<Option<Vec<u8>>>;

    /// The object's metadata document for one dialect, or `None` when the
    /// object has no such record.
    async fn fetch_metadata(&self, pid: &Pid, dialect: Dialect) -> Result<Option<String>>;

    /// PIDs that are members of the given collection. Non-success is a hard
    /// failure for the collection.
    async fn members_of(&self, pid: &Pid) -> Result<Vec<Pid>>;

    /// PIDs that are constituents of the given compound object. Non-success
    /// is a hard failure for the compound's expansion.
    async fn constituents_of(&self, pid: &Pid) -> Result<Vec<Pid>>;

    /// Content models declared by the object. Degrades to empty on a
    /// non-success probe.
    async fn models_of(&self, pid: &Pid) -> Result<Vec<String>>;

    /// Compound parents the object is a constituent of. Non-success is a
    /// hard failure, since the answer gates direct export.
    async fn constituent_parents(&self, pid: &Pid) -> Result<Vec<Pid>>;
}
