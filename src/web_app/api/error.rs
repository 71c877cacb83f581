// web_app/api/error.rs - Catalog API error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("invalid catalog configuration: {0}")]
    Config(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
