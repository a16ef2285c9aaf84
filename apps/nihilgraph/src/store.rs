//! # Store Client
//!
//! Wrapper around the external PostgREST-style read API that holds the
//! graph tables (`rpes`, `axioms`, `knowledge_graph`).
//!
//! ## Configuration (Environment Variables)
//!
//! - `NIHILGRAPH_STORE_URL`: base URL of the data store (required)
//! - `NIHILGRAPH_SERVICE_KEY`: privileged service credential (required)
//!
//! The key is sent on every request both as an `apikey` header and as the
//! Bearer token, which is what the store's REST gateway expects.
//!
//! Every fetch reads the entire table (`select=*`, no limit, no
//! pagination); the service recomputes the full snapshot per request.

use nihilgraph_core::{AxiomRecord, RelationshipRecord, RpeRecord};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

/// Environment variable naming the store base URL.
pub const STORE_URL_ENV: &str = "NIHILGRAPH_STORE_URL";

/// Environment variable naming the service credential.
pub const SERVICE_KEY_ENV: &str = "NIHILGRAPH_SERVICE_KEY";

// =============================================================================
// STORE CLIENT
// =============================================================================

/// HTTP client for the three read queries against the external store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    /// Create a client for the given store URL and service key.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            service_key: service_key.into(),
        }
    }

    /// Build a client from `NIHILGRAPH_STORE_URL` / `NIHILGRAPH_SERVICE_KEY`.
    ///
    /// Absence (or emptiness) of either variable is a configuration error;
    /// it surfaces through the generic error path like any other failure.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_env_with_overrides(None, None)
    }

    /// Build a client from the environment, with CLI-supplied overrides
    /// taking precedence per field.
    pub fn from_env_with_overrides(
        base_url: Option<String>,
        service_key: Option<String>,
    ) -> Result<Self, ServiceError> {
        let base_url = match base_url {
            Some(url) => url,
            None => require_env(STORE_URL_ENV)?,
        };
        let service_key = match service_key {
            Some(key) => key,
            None => require_env(SERVICE_KEY_ENV)?,
        };
        Ok(Self::new(base_url, service_key))
    }

    /// The store base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all RPE rows, ordered by descending transcendence score.
    pub async fn fetch_rpes(&self) -> Result<Vec<RpeRecord>, ServiceError> {
        self.fetch_rows("rpes", Some("transcendence_score.desc"))
            .await
    }

    /// Fetch all axiom rows, ordered by ascending axiom number.
    pub async fn fetch_axioms(&self) -> Result<Vec<AxiomRecord>, ServiceError> {
        self.fetch_rows("axioms", Some("axiom_number.asc")).await
    }

    /// Fetch all relationship rows, unordered.
    pub async fn fetch_relationships(&self) -> Result<Vec<RelationshipRecord>, ServiceError> {
        self.fetch_rows("knowledge_graph", None).await
    }

    /// Fetch every row of `table` as a typed vector.
    ///
    /// `order` is a PostgREST order expression (`column.direction`); when
    /// absent the store's natural order is taken as-is.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>, ServiceError> {
        let mut url = format!("{}/rest/v1/{}?select=*", self.base_url, table);
        if let Some(order) = order {
            url.push_str("&order=");
            url.push_str(order);
        }

        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers())
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| ServiceError::Connection {
                url: self.base_url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::UpstreamStatus {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Vec<T>>().await.map_err(|e| ServiceError::Decode {
            table: table.to_string(),
            message: e.to_string(),
        })
    }

    /// The `apikey` header the store's gateway requires alongside the
    /// Bearer token.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.service_key) {
            headers.insert("apikey", value);
        }
        headers
    }
}

/// Read a required, non-empty environment variable.
fn require_env(name: &'static str) -> Result<String, ServiceError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ServiceError::MissingConfig(name))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StoreClient::new("http://store.local/", "key");
        assert_eq!(client.base_url(), "http://store.local");
    }

    #[test]
    fn missing_env_is_a_config_error() {
        // SAFETY: This is a unit test running in isolation.
        unsafe { std::env::remove_var(STORE_URL_ENV) };
        let result = StoreClient::from_env();
        assert!(matches!(
            result,
            Err(ServiceError::MissingConfig(STORE_URL_ENV))
        ));
    }
}
