//! HTTP response handling.

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around a successful HTTP response.
///
/// Only responses that passed status classification are handed out, so the
/// body can be read straight into an entity decoder.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
    url: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, url: impl Into<String>) -> Self {
        Self {
            inner,
            url: url.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// The URL the request was sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// Map a status code onto the Harvest error taxonomy.
///
/// 503 is the service's throttle signal and is reported separately so callers
/// can back off. Anything not in `accepted` becomes [`ErrorKind::Http`].
pub(crate) fn classify_status(status: u16, url: &str, accepted: &[u16]) -> Result<()> {
    if status == 503 {
        return Err(Error::new(ErrorKind::ThrottleLimit {
            url: url.to_string(),
        }));
    }
    if accepted.contains(&status) {
        return Ok(());
    }
    Err(Error::new(ErrorKind::Http {
        status,
        url: url.to_string(),
    }))
}
