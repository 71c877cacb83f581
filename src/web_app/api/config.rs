// web_app/api/config.rs - Catalog API configuration
//
// Reads from the environment (and a `.env` file when present):
//   CATALOG_API_URL           base URL of the catalog API
//   CATALOG_API_TIMEOUT_SECS  per-request timeout

use std::env;
use std::time::Duration;

use url::Url;

use super::error::{CatalogError, CatalogResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Parsed http(s) base URL; any query string is kept on every endpoint
    pub api_url: Url,
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(api_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let raw = api_url.trim();
        let api_url = Url::parse(raw)
            .map_err(|e| CatalogError::Config(format!("CATALOG_API_URL={:?}: {}", raw, e)))?;

        if !matches!(api_url.scheme(), "http" | "https") || api_url.cannot_be_a_base() {
            return Err(CatalogError::Config(format!(
                "CATALOG_API_URL must be an http(s) URL, got {:?}",
                raw
            )));
        }

        Ok(Self { api_url, timeout })
    }

    /// Build from the environment, falling back to defaults for unset keys
    pub fn from_env() -> CatalogResult<Self> {
        dotenv::dotenv().ok();

        let api_url = env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = match env::var("CATALOG_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                CatalogError::Config(format!("CATALOG_API_TIMEOUT_SECS={:?}: {}", raw, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(&api_url, Duration::from_secs(timeout))
    }

    /// Absolute URL of an endpoint, one path segment per item.
    ///
    /// Segments are percent-encoded, so a note such as `ylang/ylang`
    /// stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::Config(format!("{} cannot be used as a base URL", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> CatalogResult<CatalogConfig> {
        CatalogConfig::new(api_url, Duration::from_secs(5))
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = config("https://catalog.example/api/").unwrap();
        assert_eq!(
            config.endpoint(&["brands"]).unwrap().as_str(),
            "https://catalog.example/api/brands"
        );
    }

    #[test]
    fn test_query_string_stays_after_the_path() {
        let config = config("http://catalog.example/api?key=abc").unwrap();
        assert_eq!(
            config.endpoint(&["fragrances"]).unwrap().as_str(),
            "http://catalog.example/api/fragrances?key=abc"
        );
    }

    #[test]
    fn test_segments_are_encoded() {
        let config = config("http://catalog.example/api").unwrap();
        let url = config.endpoint(&["notes", "pink pepper", "fragrances"]).unwrap();
        assert_eq!(url.path(), "/api/notes/pink%20pepper/fragrances");

        let url = config.endpoint(&["notes", "ylang/ylang", "fragrances"]).unwrap();
        assert_eq!(url.path(), "/api/notes/ylang%2Fylang/fragrances");
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        assert!(matches!(config("ftp://catalog"), Err(CatalogError::Config(_))));
        assert!(matches!(config("mailto:catalog@example.com"), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        assert!(matches!(config("http://not a host/"), Err(CatalogError::Config(_))));
        assert!(matches!(config("catalog.example/api"), Err(CatalogError::Config(_))));
        assert!(matches!(config(""), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_default_points_at_local_api() {
        let config = config(DEFAULT_API_URL).unwrap();
        assert_eq!(
            config.endpoint(&["fragrances"]).unwrap().as_str(),
            "http://localhost:8000/api/fragrances"
        );
    }
}
