// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). On the server they proxy the
// external catalog API; on the client the #[server] macro turns them into
// HTTP POST stubs.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::CatalogClient, ServerFnError> {
    use crate::web_app::api::{client, CatalogClient};

    // Context first (tests or manual setup), then the global client
    if let Some(client) = use_context::<CatalogClient>() {
        return Ok(client);
    }
    if let Some(client) = client::get_client() {
        return Ok(client);
    }

    tracing::error!("Catalog client could not be resolved from any source");
    Err(ServerFnError::new("Catalog API not configured"))
}

#[cfg(feature = "ssr")]
fn log_outcome<T>(what: &str, result: &Result<Vec<T>, crate::web_app::api::CatalogError>) {
    match result {
        Ok(records) => tracing::info!("Loaded {} {}", records.len(), what),
        Err(e) => tracing::error!("Loading {} failed: {}", what, e),
    }
}

/// Every fragrance in the catalog
#[server(GetFragrances, "/api")]
pub async fn get_fragrances() -> Result<Vec<Fragrance>, ServerFnError> {
    let result = client()?.fragrances().await;
    log_outcome("fragrances", &result);
    result.map_err(|e| ServerFnError::new(format!("Failed to load fragrances: {}", e)))
}

/// Every brand in the catalog
#[server(GetBrands, "/api")]
pub async fn get_brands() -> Result<Vec<Brand>, ServerFnError> {
    let result = client()?.brands().await;
    log_outcome("brands", &result);
    result.map_err(|e| ServerFnError::new(format!("Failed to load brands: {}", e)))
}

/// Notes, accords or perfumers
#[server(GetCatalogItems, "/api")]
pub async fn get_catalog_items(kind: CatalogKind) -> Result<Vec<CatalogItem>, ServerFnError> {
    let result = client()?.items(kind).await;
    log_outcome(kind.as_str(), &result);
    result.map_err(|e| ServerFnError::new(format!("Failed to load {}: {}", kind.as_str(), e)))
}

/// Fragrances that list `note` in any layer
#[server(GetNoteFragrances, "/api")]
pub async fn get_note_fragrances(note: String) -> Result<Vec<Fragrance>, ServerFnError> {
    let result = client()?.note_fragrances(&note).await;
    log_outcome("note fragrances", &result);
    result.map_err(|e| ServerFnError::new(format!("Failed to load fragrances for {}: {}", note, e)))
}

/// One fragrance picked by the catalog API
#[server(GetRandomFragrance, "/api")]
pub async fn get_random_fragrance() -> Result<Fragrance, ServerFnError> {
    let fragrance = client()?.random_fragrance().await.map_err(|e| {
        tracing::error!("Random fragrance failed: {}", e);
        ServerFnError::new(format!("Failed to pick a fragrance: {}", e))
    })?;
    tracing::info!("Random fragrance: {}", fragrance.name);
    Ok(fragrance)
}
