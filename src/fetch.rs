//! Client for the remote user directory.
//!
//! One `GET {endpoint}?results={n}` per load. The response body is
//! `{ "results": [ ...users... ] }`; everything else in it is ignored.
//! There are no retries: a failed load is reported once and the caller
//! decides what to show.

use crate::config::Config;
use crate::record::UserRecord;
use serde::Deserialize;
use thiserror::Error;

const USER_AGENT: &str = concat!("rolodex/", env!("CARGO_PKG_VERSION"));

/// Why a load failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request did not complete (connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Endpoint that was queried.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status.
    #[error("{url} answered with HTTP {status}")]
    Status {
        /// Endpoint that was queried.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body is not a `{ "results": [...] }` document.
    #[error("malformed user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<UserRecord>,
}

/// Decodes a provider response body into records, in provider order.
///
/// ```
/// let body = r#"{ "results": [ { "name": { "first": "Ada", "last": "Lovelace" } } ], "info": {} }"#;
/// let users = rolodex::fetch::parse_users(body).unwrap();
/// assert_eq!(users[0].display_name(), "Ada Lovelace");
/// ```
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.results)
}

/// HTTP client bound to one endpoint and batch size.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    endpoint: String,
    results: usize,
}

impl UserClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            results: config.results,
        })
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of users requested per call.
    pub fn results(&self) -> usize {
        self.results
    }

    /// Fetches one batch of users.
    pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, results = self.results, "fetching users");

        let transport = |source| FetchError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("results", self.results)])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let users = parse_users(&body)?;
        tracing::info!(count = users.len(), "fetched users");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_provider_order() {
        let body = r#"{
            "results": [
                { "name": { "first": "Zoe", "last": "Adams" }, "email": "zoe@example.com" },
                { "name": { "first": "Anna", "last": "Berg" }, "email": "anna@example.com" }
            ],
            "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
        }"#;

        let users = parse_users(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "zoe@example.com");
        assert_eq!(users[1].display_name(), "Anna Berg");
    }

    #[test]
    fn test_parse_rejects_missing_results() {
        let err = parse_users(r#"{ "error": "Uh oh, something has gone wrong." }"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("malformed user payload"));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(parse_users("<html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_client_keeps_configuration() {
        let config = Config {
            results: 25,
            ..Config::default()
        };
        let client = UserClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://randomuser.me/api/");
        assert_eq!(client.results(), 25);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = Config {
            endpoint: "http://127.0.0.1:9/api/".to_string(),
            timeout: std::time::Duration::from_secs(2),
            ..Config::default()
        };
        let client = UserClient::new(&config).unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
