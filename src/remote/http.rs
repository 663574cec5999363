//! HTTP implementation of the version endpoint

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_BASE_URL, FETCH_TIMEOUT_MS, USER_AGENT};
use crate::remote::error::FetchError;
use crate::remote::source::VersionSource;

/// Response from the version endpoint
#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

/// Version source backed by `GET {base_url}/version/{system}`
#[derive(Clone)]
pub struct HttpVersionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVersionSource {
    /// Creates a new HttpVersionSource with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new HttpVersionSource from client configuration
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout))
    }

    /// Creates a new HttpVersionSource pointing at the public endpoint
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, Duration::from_millis(FETCH_TIMEOUT_MS))
    }

    fn version_url(&self, system: char) -> String {
        format!("{}/version/{}", self.base_url, system)
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_version(&self, system: char) -> Result<String, FetchError> {
        let url = self.version_url(system);
        debug!("Fetching version token: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(system));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Version endpoint returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: VersionResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse version response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(body.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn source_for(server: &Server) -> HttpVersionSource {
        HttpVersionSource::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_version_returns_published_token() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/H")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "0105HR3"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('H').await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, "0105HR3");
    }

    #[tokio::test]
    async fn fetch_version_ignores_extra_fields() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/T")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "0201TB1", "publishedAt": "2024-01-01"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('T').await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, "0201TB1");
    }

    #[tokio::test]
    async fn fetch_version_tolerates_trailing_slash_in_base_url() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/U")
            .with_status(200)
            .with_body(r#"{"version": "0300UA0"}"#)
            .create_async()
            .await;

        let source =
            HttpVersionSource::new(&format!("{}/", server.url()), Duration::from_secs(5)).unwrap();
        let result = source.fetch_version('U').await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, "0300UA0");
    }

    #[tokio::test]
    async fn fetch_version_returns_not_found_for_unpublished_system() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/Z")
            .with_status(404)
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('Z').await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::NotFound('Z'))));
    }

    #[tokio::test]
    async fn fetch_version_returns_rate_limited_with_retry_after() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/T")
            .with_status(429)
            .with_header("retry-after", "60")
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('T').await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::RateLimited {
                retry_after_secs: Some(60)
            })
        ));
    }

    #[tokio::test]
    async fn fetch_version_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/T")
            .with_status(500)
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('T').await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_version_returns_invalid_response_for_malformed_json() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/T")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('T').await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_version_returns_invalid_response_when_version_field_missing() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version/T")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"latest": "0105HR3"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_version('T').await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = Config {
            base_url: "http://localhost:8080/".to_string(),
            ..Config::default()
        };

        let source = HttpVersionSource::from_config(&config).unwrap();

        assert_eq!(source.version_url('C'), "http://localhost:8080/version/C");
    }

    #[test]
    fn with_defaults_points_at_public_endpoint() {
        let source = HttpVersionSource::with_defaults().unwrap();

        assert_eq!(
            source.version_url('T'),
            "https://api.gridlock.galacticstudio.space/version/T"
        );
    }
}
