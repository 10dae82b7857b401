use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// A single outgoing POST
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TransportRequest {
    /// First value of `name`, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the server: numeric status and raw body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for the HTTP layer under the storage client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one POST and return whatever status the server answered with.
    /// Only connection-level failures are errors.
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport. No timeout or retry beyond the client defaults.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!("POST {} -> {} ({} bytes)", request.url, status, body.len());

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = TransportRequest {
            url: "http://localhost/".to_string(),
            headers: vec![("Content-Type".to_string(), "image/svg+xml".to_string())],
            body: Vec::new(),
        };
        assert_eq!(request.header("content-type"), Some("image/svg+xml"));
        assert_eq!(request.header("x-upsert"), None);
    }

    #[test]
    fn test_transport_creation() {
        let _transport = ReqwestTransport::new();
        let _default = ReqwestTransport::default();
    }
}
