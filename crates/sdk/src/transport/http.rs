//! HTTP transport layer for the Dokploy SDK.
//!
//! Every outbound call goes through [`HttpTransport`]: one request per
//! invocation, no retries, the outcome normalised into a JSON value or a
//! [`DokployError`].

use crate::config::{AuthScheme, ClientConfig};
use crate::error::{DokployError, DokployResult};
use reqwest::{header, Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> DokployResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let (name, value) = match config.auth_scheme {
            AuthScheme::ApiKey => (
                header::HeaderName::from_static("x-api-key"),
                config.api_key.clone(),
            ),
            AuthScheme::Bearer => (header::AUTHORIZATION, format!("Bearer {}", config.api_key)),
        };
        let mut value = header::HeaderValue::from_str(&value)
            .map_err(|_| DokployError::Config("Invalid API key format".to_string()))?;
        value.set_sensitive(true);
        headers.insert(name, value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Configuration this transport was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for a relative API path such as `/project.all`.
    fn build_url(&self, path: &str) -> DokployResult<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{}/api{}", base, path)
        } else {
            format!("{}/api/{}", base, path)
        };
        Ok(Url::parse(&url)?)
    }

    /// Send one request and normalise the outcome.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
    ) -> DokployResult<Value> {
        if self.config.debug {
            info!(method = %method, url = %url, "Dokploy API request");
        } else {
            debug!(method = %method, url = %url, "Dokploy API request");
        }

        let result = self.read_response(request).await;

        if let Err(ref e) = result {
            if self.config.debug {
                error!(method = %method, url = %url, error = %e, "Dokploy API request failed");
            } else {
                debug!(method = %method, url = %url, error = %e, "Dokploy API request failed");
            }
        }

        result
    }

    async fn read_response(&self, request: RequestBuilder) -> DokployResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DokployError::from_response(status.as_u16(), &body));
        }

        Ok(parse_body(body))
    }

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> DokployResult<Value> {
        let url = self.build_url(path)?;
        let request = self.client.get(url.clone());
        self.execute(Method::GET, url, request).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> DokployResult<Value> {
        let url = self.build_url(path)?;
        let request = self.client.get(url.clone()).query(query);
        self.execute(Method::GET, url, request).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> DokployResult<Value> {
        let url = self.build_url(path)?;
        let request = self.client.post(url.clone()).json(body);
        self.execute(Method::POST, url, request).await
    }
}

/// Successful bodies are JSON when they parse, raw text otherwise.
fn parse_body(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemovalVerb;
    use serde::Serialize;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TestQuery {
        project_id: String,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(
            url::Url::parse(base_url).unwrap(),
            "test-key",
        ))
    }

    fn create_config_with_scheme(base_url: &str, scheme: AuthScheme) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            base_url: url::Url::parse(base_url).unwrap(),
            api_key: "test-key".to_string(),
            debug: true,
            auth_scheme: scheme,
            removal_verb: RemovalVerb::Delete,
            timeout: None,
        })
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.all"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"projectId": "p1", "name": "demo"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport.get("/project.all").await.unwrap();
        assert_eq!(result[0]["projectId"], "p1");
    }

    #[tokio::test]
    async fn test_get_with_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.one"))
            .and(query_param("projectId", "p1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"projectId": "p1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let query = TestQuery {
            project_id: "p1".to_string(),
        };
        let result = transport.get_with_query("/project.one", &query).await.unwrap();
        assert_eq!(result["projectId"], "p1");
    }

    #[tokio::test]
    async fn test_get_sends_no_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/server.all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        transport.get("/server.all").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_post_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/project.create"))
            .and(body_json(serde_json::json!({"name": "demo", "description": ""})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"projectId": "p1", "name": "demo"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let body = serde_json::json!({"name": "demo", "description": ""});
        let result = transport.post("/project.create", &body).await.unwrap();
        assert_eq!(result["name"], "demo");
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.all"))
            .and(header("x-api-key", "test-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = create_config_with_scheme(&server.uri(), AuthScheme::ApiKey);
        let transport = HttpTransport::new(config).unwrap();

        transport.get("/project.all").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_bearer_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.all"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = create_config_with_scheme(&server.uri(), AuthScheme::Bearer);
        let transport = HttpTransport::new(config).unwrap();

        transport.get("/project.all").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("x-api-key").is_none());
    }

    #[tokio::test]
    async fn test_error_on_401_keeps_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/project.create"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport
            .post("/project.create", &serde_json::json!({"name": "demo"}))
            .await;
        match result {
            Err(DokployError::Upstream { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("Expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_on_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/project.all"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "Internal"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let err = transport.get("/project.all").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Internal"));
    }

    #[tokio::test]
    async fn test_text_body_returned_raw() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/application.readLogs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("line one\nline two"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport.get("/application.readLogs").await.unwrap();
        assert_eq!(result, Value::String("line one\nline two".to_string()));
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/application.deploy"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport
            .post("/application.deploy", &serde_json::json!({"applicationId": "a1"}))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = create_config(&format!("http://127.0.0.1:{}", port));
        let transport = HttpTransport::new(config).unwrap();

        let err = transport.get("/project.all").await.unwrap_err();
        assert!(matches!(err, DokployError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_build_url() {
        let transport = HttpTransport::new(create_config("http://localhost:3000")).unwrap();

        let url = transport.build_url("/project.all").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/project.all");
    }

    #[tokio::test]
    async fn test_build_url_with_trailing_slash_and_prefix() {
        let transport =
            HttpTransport::new(create_config("https://paas.example.com/dokploy/")).unwrap();

        let url = transport.build_url("project.all").unwrap();
        assert_eq!(url.as_str(), "https://paas.example.com/dokploy/api/project.all");
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let config = Arc::new(ClientConfig::new(
            url::Url::parse("http://localhost:3000").unwrap(),
            "bad\nkey",
        ));
        let err = HttpTransport::new(config).unwrap_err();
        assert!(matches!(err, DokployError::Config(_)));
    }
}
