//! Error types for harvest-client.

/// Result type alias for harvest-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by every Harvest API operation.
///
/// Callers discriminate on [`Error::kind`]; the lower-level cause (reqwest,
/// quick-xml, ...) is kept in `source` and never exposed as the kind itself.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a missing required parameter.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingParameter(name.into()))
    }

    /// Returns true if a required parameter was absent.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingParameter(_))
    }

    /// Returns true if the service signalled its throttle limit (HTTP 503).
    pub fn is_throttled(&self) -> bool {
        matches!(self.kind, ErrorKind::ThrottleLimit { .. })
    }

    /// Returns true if an invoice number was not found in the reconciliation cache.
    pub fn is_cache_miss(&self) -> bool {
        matches!(self.kind, ErrorKind::CacheMiss { .. })
    }

    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            ErrorKind::ThrottleLimit { .. } => Some(503),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required parameter was not supplied. Raised before any request is sent.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// The service returned 503, its rate-limit signal. Never retried here.
    #[error("Throttle limit reached: {url}")]
    ThrottleLimit { url: String },

    /// The service returned a status outside the accepted set.
    #[error("Returned status code {status}: {url}")]
    Http { status: u16, url: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure while performing the request or reading the body.
    #[error("Could not perform request: {0}")]
    Request(String),

    /// XML could not be decoded into, or encoded from, an entity.
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required environment variable was not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// The invoice number is not present in the reconciliation cache.
    #[error("Unable to find invoice number {invoice_number} in cache")]
    CacheMiss { invoice_number: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Request(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::with_source(ErrorKind::Xml(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
