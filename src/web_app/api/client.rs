// web_app/api/client.rs - HTTP client for the catalog API
//
// The catalog API is an opaque collaborator returning JSON collections.
// A request is made once; failures are reported to the caller, never
// retried here.

use std::sync::{Mutex, OnceLock};

use serde::de::DeserializeOwned;

use super::config::CatalogConfig;
use super::error::{CatalogError, CatalogResult};
use crate::web_app::model::{Brand, CatalogItem, CatalogKind, Fragrance};

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<CatalogClient>> = Mutex::new(None);

/// Install the process-wide client
pub fn init_client(client: CatalogClient) {
    tracing::info!("Initializing global catalog client for {}", client.config().api_url);
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: CatalogClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global client
pub fn get_client() -> Option<CatalogClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global catalog client is empty!");
    }
    client
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> CatalogResult<Self> {
        Self::new(CatalogConfig::from_env()?)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> CatalogResult<T> {
        let url = self.config.endpoint(segments)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog API returned {} for {}", status, url);
            return Err(CatalogError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn fragrances(&self) -> CatalogResult<Vec<Fragrance>> {
        self.get_json(&["fragrances"]).await
    }

    pub async fn brands(&self) -> CatalogResult<Vec<Brand>> {
        self.get_json(&["brands"]).await
    }

    /// Notes, accords or perfumers
    pub async fn items(&self, kind: CatalogKind) -> CatalogResult<Vec<CatalogItem>> {
        self.get_json(&[kind.as_str()]).await
    }

    pub async fn random_fragrance(&self) -> CatalogResult<Fragrance> {
        self.get_json(&["fragrances", "random"]).await
    }

    /// Fragrances listing `note` in any layer
    pub async fn note_fragrances(&self, note: &str) -> CatalogResult<Vec<Fragrance>> {
        self.get_json(&["notes", note.trim(), "fragrances"]).await
    }
}
