//! Core HTTP client with Harvest status classification.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::{classify_status, Response};

/// Statuses a POST may return and still count as success.
const POST_ACCEPTED: &[u16] = &[200, 201];

/// HTTP client for the Harvest API. No retries: a throttled call is reported
/// to the caller, who decides whether and when to try again.
#[derive(Debug, Clone)]
pub struct HarvestHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HarvestHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Execute a request once and classify the outcome.
    ///
    /// - 503 on any method → [`ErrorKind::ThrottleLimit`]
    /// - POST: anything other than 200/201 → [`ErrorKind::Http`]
    /// - GET: anything outside 2xx → [`ErrorKind::Http`]
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        if let Some(ref authorization) = request.authorization {
            req = req.header("Authorization", authorization.as_str());
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %request.url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        match request.method {
            RequestMethod::Post => classify_status(status, &request.url, POST_ACCEPTED)?,
            RequestMethod::Get if response.status().is_success() => {}
            RequestMethod::Get => classify_status(status, &request.url, &[])?,
        }

        Ok(Response::new(response, request.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HarvestHttpClient {
        HarvestHttpClient::new(ClientConfig::builder().with_tracing(false).build()).unwrap()
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HarvestHttpClient::default_client().unwrap();
        assert!(client.config().enable_tracing);
    }

    #[tokio::test]
    async fn test_successful_get() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people"))
            .and(header("Authorization", "Basic dXNlcjpwYXNz"))
            .and(header("Accept", "application/xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<users type=\"array\"/>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client();
        let response = client
            .execute(
                client
                    .get(format!("{}/people", mock_server.uri()))
                    .authorization("Basic dXNlcjpwYXNz")
                    .accept_xml(),
            )
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.text().await.unwrap(), "<users type=\"array\"/>");
    }

    #[tokio::test]
    async fn test_post_sends_xml_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/invoices/1/payments"))
            .and(header("Content-Type", "application/xml"))
            .and(body_string("<payment><amount>10</amount></payment>"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client();
        let response = client
            .execute(
                client
                    .post(format!("{}/invoices/1/payments", mock_server.uri()))
                    .xml("<payment><amount>10</amount></payment>"),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
    }

    #[tokio::test]
    async fn test_post_503_is_throttle() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client();
        let err = client
            .execute(client.post(format!("{}/invoices/1/payments", mock_server.uri())))
            .await
            .unwrap_err();

        assert!(err.is_throttled());
    }

    #[tokio::test]
    async fn test_post_202_is_generic_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&mock_server)
            .await;

        let client = client();
        let err = client
            .execute(client.post(format!("{}/invoices/1/payments", mock_server.uri())))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(202));
    }

    #[tokio::test]
    async fn test_get_non_success_is_classified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/invoices/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/people"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client();
        let url = format!("{}/invoices/404", mock_server.uri());
        let err = client.execute(client.get(url.clone())).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Http { status: 404, url: ref u } if *u == url));

        let err = client
            .execute(client.get(format!("{}/people", mock_server.uri())))
            .await
            .unwrap_err();
        assert!(err.is_throttled());
    }

    #[tokio::test]
    async fn test_connection_failure_is_wrapped() {
        let client = client();
        // Port 9 (discard) on localhost is not expected to accept HTTP connections.
        let err = client
            .execute(client.get("http://127.0.0.1:9/people"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.kind,
            ErrorKind::Connection(_) | ErrorKind::Request(_) | ErrorKind::Timeout
        ));
        assert!(err.source.is_some());
    }
}
