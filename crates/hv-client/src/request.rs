//! HTTP request building with Harvest-specific headers.

use std::collections::HashMap;

/// XML media type used for both `Accept` and `Content-Type`.
pub const APPLICATION_XML: &str = "application/xml";

/// HTTP request method.
///
/// The Harvest XML API is only read with GET and written with POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Builder for a single HTTP request. Created fresh per call and consumed by
/// [`crate::HarvestHttpClient::execute`].
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<String>,
    /// Full `Authorization` header value (`Basic ...`).
    pub(crate) authorization: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            authorization: None,
        }
    }

    /// Get the request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Get the request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a header value set on this request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Get the request body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Set the `Authorization` header value.
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Ask for an XML response.
    pub fn accept_xml(self) -> Self {
        self.header("Accept", APPLICATION_XML)
    }

    /// Set an XML body.
    pub fn xml(mut self, data: impl Into<String>) -> Self {
        self.body = Some(data.into());
        self.headers
            .insert("Content-Type".to_string(), APPLICATION_XML.to_string());
        self
    }
}
