//! Fedora 3 repository adapter
//!
//! Implements the [`Repository`] trait over a Fedora 3 REST API and its
//! resource index. The REST pieces live in [`client`], the SPARQL tuple
//! queries in [`risearch`], and the wire formats in [`models`].

pub mod client;
pub mod models;
pub mod risearch;

pub use client::FedoraClient;

use crate::adapters::traits::Repository;
use crate::domain::{DatastreamDescriptor, Dialect, Pid, Result};
use async_trait::async_trait;

#[async_trait]
impl Repository for FedoraClient {
    async fn datastreams(&self, pid: &Pid) -> Result<Vec<DatastreamDescriptor>> {
        self.object_datastreams(pid).await
    }

    async fn fetch_datastream(&self, pid: &Pid, dsid: &str) -> Result<Option<Vec<u8>>> {
        self.datastream_content(pid, dsid).await
    }

    async fn fetch_metadata(&self, pid: &Pid, dialect: Dialect) -> Result<Option<String>> {
        self.metadata_document(pid, dialect).await
    }

    async fn members_of(&self, pid: &Pid) -> Result<Vec<Pid>> {
        self.collection_members(pid).await
    }

    async fn constituents_of(&self, pid: &Pid) -> Result<Vec<Pid>> {
        self.compound_constituents(pid).await
    }

    async fn models_of(&self, pid: &Pid) -> Result<Vec<String>> {
        self.object_models(pid).await
    }

    async fn constituent_parents(&self, pid: &Pid) -> Result<Vec<Pid>> {
        self.object_constituent_parents(pid).await
    }
}
