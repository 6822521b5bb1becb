//! HTTP transport for relay and blocks API calls

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::timeout;
use types::{RelayEndpoint, RelayError, RelayKitError, Result};

/// Header name to value; later entries replace earlier ones with the same name
pub type Headers = BTreeMap<String, String>;

/// JSON over HTTP. Retries and backoff, if any, live behind this trait.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// POST `body` with `headers` and parse the response as JSON.
    ///
    /// `headers` replace the transport's defaults, including `Content-Type`.
    async fn post_json(&self, url: &str, headers: &Headers, body: String) -> Result<Value>;

    /// Unauthenticated GET with query parameters, parsed as JSON
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;
}

/// reqwest-backed transport for a single relay
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    relay_name: String,
    timeout: Duration,
    http_client: Client,
}

impl ReqwestTransport {
    /// Create a transport using the endpoint's name, timeout and user agent
    pub fn new(endpoint: &RelayEndpoint) -> Result<Self> {
        let timeout = Duration::from_secs(endpoint.timeout_seconds);
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(endpoint.user_agent.as_str())
            .build()
            .map_err(|e| RelayKitError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            relay_name: endpoint.name.clone(),
            timeout,
            http_client,
        })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = timeout(self.timeout, request.send())
            .await
            .map_err(|_| RelayError::ConnectionTimeout {
                relay: self.relay_name.clone(),
            })?
            .map_err(|e| self.send_error(e))?;

        if !response.status().is_success() {
            return Err(RelayError::HttpError {
                relay: self.relay_name.clone(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let raw_text = response.text().await.map_err(|e| RelayError::InvalidResponse {
            relay: self.relay_name.clone(),
            message: format!("error reading response body: {}", e),
        })?;

        serde_json::from_str(&raw_text).map_err(|e| {
            RelayError::InvalidResponse {
                relay: self.relay_name.clone(),
                message: format!("invalid JSON response: {} | raw: {}", e, raw_text),
            }
            .into()
        })
    }

    fn header_map(&self, headers: &Headers) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in headers {
            let invalid = |e: &dyn std::fmt::Display| RelayError::Transport {
                relay: self.relay_name.clone(),
                message: format!("invalid header {}: {}", name, e),
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(&e))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(&e))?;
            map.insert(header_name, header_value);
        }

        Ok(map)
    }

    fn send_error(&self, e: reqwest::Error) -> RelayError {
        if e.is_timeout() {
            RelayError::ConnectionTimeout {
                relay: self.relay_name.clone(),
            }
        } else if let Some(status) = e.status() {
            RelayError::HttpError {
                relay: self.relay_name.clone(),
                status: status.as_u16(),
            }
        } else {
            RelayError::Transport {
                relay: self.relay_name.clone(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, headers: &Headers, body: String) -> Result<Value> {
        let headers = self.header_map(headers)?;
        let request = self.http_client.post(url).headers(headers).body(body);

        self.execute(request).await
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        self.execute(self.http_client.get(url).query(query)).await
    }
}
