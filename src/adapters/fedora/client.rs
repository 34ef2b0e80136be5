//! Fedora 3 REST client
//!
//! Covers the REST endpoints the walker needs: the datastream manifest,
//! datastream content, and the DC/MODS metadata documents. Requests carry
//! HTTP Basic credentials when configured. There is no retry policy and no
//! client-side timeout beyond transport defaults; each call either succeeds,
//! degrades per its contract, or surfaces a repository error.

use crate::adapters::fedora::models;
use crate::config::{RepositoryConfig, SecretString};
use crate::domain::{DatastreamDescriptor, Dialect, Pid, RepositoryError, Result};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;

/// HTTP client for one repository
pub struct FedoraClient {
    /// REST API root, always with a trailing slash
    rest_url: String,

    /// Resource index search endpoint
    pub(super) ri_url: String,

    client: Client,
    username: Option<String>,
    password: Option<SecretString>,
}

impl FedoraClient {
    /// Creates a client from repository configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let rest_url = if config.rest_url.ends_with('/') {
            config.rest_url.clone()
        } else {
            format!("{}/", config.rest_url)
        };

        Ok(Self {
            rest_url,
            ri_url: config.ri_url.clone(),
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL of the repository REST API
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// Authorization header value for configured credentials
    pub(super) fn auth_header_value(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                let credentials = format!("{username}:{}", password.expose_secret());
                let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
                Some(format!("Basic {encoded}"))
            }
            _ => None,
        }
    }

    /// Form POST against the resource index endpoint
    pub(super) fn client_post_form(&self, form: &[(&str, &str)]) -> reqwest::RequestBuilder {
        self.client.post(&self.ri_url).form(form)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }
        request
            .send()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()).into())
    }

    /// Fetches and parses the object's datastream manifest
    ///
    /// # Errors
    ///
    /// A non-success status is a hard failure carrying status, URL, and
    /// response body.
    pub async fn object_datastreams(&self, pid: &Pid) -> Result<Vec<DatastreamDescriptor>> {
        let url = format!("{}objects/{pid}/datastreams?format=xml", self.rest_url);
        let response = self.get(&url).await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::ServerError { status, url, body }.into());
        }
        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))?;
        models::parse_datastream_manifest(&body)
    }

    /// Fetches one datastream's body, or `None` when the fetch fails with a
    /// non-success status (logged, skip semantics)
    pub async fn datastream_content(&self, pid: &Pid, dsid: &str) -> Result<Option<Vec<u8>>> {
        let url = format!(
            "{}objects/{pid}/datastreams/{dsid}/content",
            self.rest_url
        );
        let response = self.get(&url).await?;
        if !response.status().is_success() {
            tracing::warn!(
                pid = %pid,
                dsid = dsid,
                status = response.status().as_u16(),
                "Datastream body fetch failed, skipping file"
            );
            return Ok(None);
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))?;
        Ok(Some(bytes.to_vec()))
    }

    /// Fetches the object's metadata document for one dialect
    ///
    /// A 404 means the object simply has no such record. Other non-success
    /// statuses are logged and likewise treated as absence for this dialect
    /// only, so one sick datastream can't take down the whole member.
    pub async fn metadata_document(&self, pid: &Pid, dialect: Dialect) -> Result<Option<String>> {
        let url = format!(
            "{}objects/{pid}/datastreams/{}/content",
            self.rest_url,
            dialect.datastream_id()
        );
        let response = self.get(&url).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(pid = %pid, dialect = %dialect, "Object has no metadata record");
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(
                pid = %pid,
                dialect = %dialect,
                status = status.as_u16(),
                "Metadata fetch failed, treating record as absent"
            );
            return Ok(None);
        }
        let text = response
            .text()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))?;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_rest_url_gets_trailing_slash() {
        let config = RepositoryConfig {
            rest_url: "http://localhost:8080/fedora".to_string(),
            ..Default::default()
        };
        let client = FedoraClient::new(&config).unwrap();
        assert_eq!(client.rest_url(), "http://localhost:8080/fedora/");
    }

    #[test]
    fn test_auth_header_requires_both_credentials() {
        let config = RepositoryConfig {
            username: Some("admin".to_string()),
            ..Default::default()
        };
        let client = FedoraClient::new(&config).unwrap();
        assert!(client.auth_header_value().is_none());
    }

    #[test]
    fn test_auth_header_is_basic() {
        let config = RepositoryConfig {
            username: Some("admin".to_string()),
            password: Some(secret_string("secret".to_string())),
            ..Default::default()
        };
        let client = FedoraClient::new(&config).unwrap();
        let header = client.auth_header_value().unwrap();
        assert!(header.starts_with("Basic "));
        // "admin:secret" base64-encoded
        assert_eq!(header, "Basic YWRtaW46c2VjcmV0");
    }
}
