//! Authenticated Harvest client with typed XML methods.
//!
//! This module provides `HarvestClient`, which combines credentials with an
//! HTTP client and resolves resource paths against the account's base host.
//!
//! ## Security
//!
//! - The password is redacted in Debug output
//! - Credentials are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HarvestHttpClient;
use crate::config::ClientConfig;
use crate::credentials::HarvestCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// Authenticated Harvest API client.
///
/// Every request built through this client carries the Basic `Authorization`
/// header and `Accept: application/xml`.
///
/// # Example
///
/// ```rust,ignore
/// use harvest_client::{HarvestClient, HarvestCredentials};
///
/// let client = HarvestClient::new(HarvestCredentials::from_env()?)?;
/// let xml = client.get_text("/people").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HarvestClient {
    http: HarvestHttpClient,
    credentials: HarvestCredentials,
    base_url: String,
}

impl HarvestClient {
    /// Create a new client for the account described by `credentials`.
    pub fn new(credentials: HarvestCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(credentials: HarvestCredentials, config: ClientConfig) -> Result<Self> {
        let base_url = match config.base_url {
            Some(ref base) => base.trim_end_matches('/').to_string(),
            None => credentials.base_url(),
        };
        url::Url::parse(&base_url)?;

        let http = HarvestHttpClient::new(config)?;
        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    /// Get the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &HarvestCredentials {
        &self.credentials
    }

    /// Build the full URL for a resource path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create an authenticated GET request builder for `path`.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.url(path))
            .authorization(self.credentials.authorization_header())
            .accept_xml()
    }

    /// Create an authenticated POST request builder for `path`.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.url(path))
            .authorization(self.credentials.authorization_header())
            .accept_xml()
    }

    /// Execute a request and return the classified response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    /// GET `path` and return the XML body as text.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.http.execute(self.get(path)).await?;
        response.text().await
    }

    /// GET `path` and decode the XML body.
    pub async fn get_xml<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        quick_xml::de::from_str(&body).map_err(Into::into)
    }

    /// POST an XML document to `path`. The response body is ignored.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_text(&self, path: &str, body: String) -> Result<()> {
        let request = self.post(path).xml(body);
        self.http.execute(request).await?;
        Ok(())
    }

    /// Serialize `body` under a `root` element and POST it to `path`.
    pub async fn post_xml<B: Serialize>(&self, path: &str, root: &str, body: &B) -> Result<()> {
        let xml = to_xml(root, body)?;
        self.post_text(path, xml).await
    }
}

/// Serialize `value` as an XML document fragment rooted at `root`.
pub fn to_xml<B: Serialize>(root: &str, value: &B) -> Result<String> {
    quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| Error::with_source(ErrorKind::Xml(e.to_string()), e))
}
