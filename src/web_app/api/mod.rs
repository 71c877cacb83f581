// web_app/api/mod.rs - Catalog API access (server side only)
//
// The catalog itself lives behind an external REST API. This module
// holds the HTTP client, its configuration and the error type the
// server functions translate into `ServerFnError`.

pub mod client;
pub mod config;
pub mod error;

pub use client::{get_client, init_client, set_test_client, CatalogClient};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
