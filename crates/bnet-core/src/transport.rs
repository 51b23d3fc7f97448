//! HTTP transport shared by every session.

use reqwest::{Client, StatusCode};
use std::sync::Once;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

static CRYPTO_PROVIDER: Once = Once::new();

/// Install the ring crypto provider for rustls once per process.
///
/// reqwest is built without a default provider, so one must be installed
/// before the first client is created. Installing fails harmlessly if the
/// application already chose a provider.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Thin wrapper around a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        ensure_crypto_provider();
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(10)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body of a successful response.
    ///
    /// `path` identifies the resource in logs and errors; the full URL
    /// carries the account key and is never logged.
    pub async fn get(&self, url: Url, path: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await?;
                tracing::trace!(path, bytes = body.len(), "response received");
                Ok(body.to_vec())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(path, "rate limited by API host");
                Err(ApiError::HttpStatus {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    path: path.to_string(),
                })
            }
            status => {
                tracing::warn!(path, %status, "request failed");
                Err(ApiError::HttpStatus {
                    status,
                    path: path.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> HttpTransport {
        HttpTransport::new(&ClientConfig::default()).expect("Operation should succeed")
    }

    #[tokio::test]
    async fn test_successful_get() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wow/pet/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"pets\":[]}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/wow/pet/", mock_server.uri()))
            .expect("Operation should succeed");
        let body = transport()
            .get(url, "/wow/pet/")
            .await
            .expect("Operation should succeed");
        assert_eq!(body, b"{\"pets\":[]}");
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/busy"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let transport = transport();
        for (route, expected) in [
            ("/missing", StatusCode::NOT_FOUND),
            ("/busy", StatusCode::TOO_MANY_REQUESTS),
        ] {
            let url = Url::parse(&format!("{}{route}", mock_server.uri()))
                .expect("Operation should succeed");
            let err = transport
                .get(url, route)
                .await
                .expect_err("Test operation should fail");
            assert_eq!(err.status(), Some(expected));
            assert!(err.is_retrieval_failure());
        }
    }
}
