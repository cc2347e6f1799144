//! Query-string encoding.
//!
//! Parameters are kept as an ordered list of `(name, Option<value>)` pairs.
//! Absent values are dropped entirely, present values are form-url-encoded
//! (`application/x-www-form-urlencoded`, so a space becomes `+`), and the
//! output order is the insertion order.

use crate::error::{Error, ErrorKind, Result};

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(&'static str, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter that is always present.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, Some(value.to_string())));
        self
    }

    /// Append a parameter that is sent only when `value` is `Some`.
    pub fn with_opt<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.params.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Returns true if no parameter has a value.
    pub fn is_empty(&self) -> bool {
        self.params.iter().all(|(_, v)| v.is_none())
    }

    /// Encode present parameters, joined with `&`.
    pub fn encode(&self) -> Result<String> {
        let present: Vec<(&str, &str)> = self
            .params
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
            .collect();

        serde_urlencoded::to_string(present)
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))
    }

    /// Append the encoded query to `path`, adding `?` only when something is present.
    pub fn apply_to(&self, path: &str) -> Result<String> {
        let query = self.encode()?;
        if query.is_empty() {
            Ok(path.to_string())
        } else {
            Ok(format!("{}?{}", path, query))
        }
    }
}
