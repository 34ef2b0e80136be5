//! Resource index queries
//!
//! Relationship edges live in the repository's resource index, queried with
//! SPARQL tuple queries POSTed as form data. Membership and constituent
//! expansions are essential and fail hard; content-model probes degrade to
//! an empty model list so an unclassifiable member is treated as a simple
//! object rather than sinking the collection.

use crate::adapters::fedora::client::FedoraClient;
use crate::adapters::fedora::models::{TupleResponse, FEDORA_IRI_PREFIX};
use crate::domain::{FolioError, Pid, RepositoryError, Result};

impl FedoraClient {
    async fn tuple_query(&self, query: &str) -> Result<TupleResponse> {
        let mut request = self.client_post_form(&[
            ("type", "tuples"),
            ("lang", "sparql"),
            ("format", "json"),
            ("query", query),
        ]);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::ServerError {
                status,
                url: self.ri_url.clone(),
                body,
            }
            .into());
        }
        response.json::<TupleResponse>().await.map_err(|e| {
            RepositoryError::QueryFailed(format!("could not decode tuple response: {e}")).into()
        })
    }

    /// PIDs that are members of the given collection
    pub async fn collection_members(&self, pid: &Pid) -> Result<Vec<Pid>> {
        let query = format!(
            "SELECT DISTINCT ?s\nWHERE {{\n  ?s <fedora-rels-ext:isMemberOfCollection> <{FEDORA_IRI_PREFIX}{pid}> .\n}}"
        );
        Ok(self.tuple_query(&query).await?.pids("s"))
    }

    /// PIDs that are constituents of the given compound object
    pub async fn compound_constituents(&self, pid: &Pid) -> Result<Vec<Pid>> {
        let query = format!(
            "SELECT DISTINCT ?s\nWHERE {{\n  ?s <fedora-rels-ext:isConstituentOf> <{FEDORA_IRI_PREFIX}{pid}> .\n}}"
        );
        Ok(self.tuple_query(&query).await?.pids("s"))
    }

    /// Compound parents the object declares itself a constituent of
    pub async fn object_constituent_parents(&self, pid: &Pid) -> Result<Vec<Pid>> {
        let query = format!(
            "SELECT DISTINCT ?o\nWHERE {{\n  <{FEDORA_IRI_PREFIX}{pid}> <fedora-rels-ext:isConstituentOf> ?o .\n}}"
        );
        Ok(self.tuple_query(&query).await?.pids("o"))
    }

    /// Content models the object declares. A non-success probe degrades to
    /// an empty list.
    pub async fn object_models(&self, pid: &Pid) -> Result<Vec<String>> {
        let query = format!(
            "SELECT DISTINCT ?o\nWHERE {{\n  <{FEDORA_IRI_PREFIX}{pid}> <fedora-model:hasModel> ?o .\n}}"
        );
        match self.tuple_query(&query).await {
            Ok(response) => Ok(response
                .values("o")
                .map(|iri| iri.strip_prefix(FEDORA_IRI_PREFIX).unwrap_or(iri).to_string())
                .collect()),
            Err(FolioError::Repository(RepositoryError::ServerError { status, .. })) => {
                tracing::warn!(
                    pid = %pid,
                    status = status,
                    "Content model probe failed, treating object as unclassified"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
