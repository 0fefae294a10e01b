//! API utilities for frontend-backend communication
//!
//! Holds the products API location and the error type shared by every request.

use contracts::domain::a001_product::aggregate::ProductId;

/// Products API location.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001";

/// Where the products API lives.
///
/// Provided once via context by the app root and read by the inventory page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// `GET`/`POST` endpoint of the product collection
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// `PUT`/`DELETE` endpoint of a single product
    pub fn product_url(&self, id: &ProductId) -> String {
        format!(
            "{}/products/{}",
            self.base_url,
            urlencoding::encode(&id.as_string())
        )
    }
}

/// Failure of a single API request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Encode(gloo_net::Error),
    #[error("Failed to send request: {0}")]
    Request(gloo_net::Error),
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Failed to parse response: {0}")]
    Decode(gloo_net::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.products_url(), "http://localhost:5001/products");
    }

    #[test]
    fn test_product_url_encodes_id() {
        let config = ApiConfig::new("http://inventory.local:5001/");
        assert_eq!(
            config.product_url(&ProductId::Number(42)),
            "http://inventory.local:5001/products/42"
        );
        assert_eq!(
            config.product_url(&ProductId::from("a b/c")),
            "http://inventory.local:5001/products/a%20b%2Fc"
        );
    }

    #[test]
    fn test_product_url_for_raw_json_id() {
        let config = ApiConfig::default();
        assert_eq!(
            config.product_url(&ProductId::Other(serde_json::json!(2.5))),
            "http://localhost:5001/products/2.5"
        );
    }
}
