use crate::config::Config;

use super::error::CatalogError;
use super::types::Product;

/// HTTP client for the remote product feed.
#[derive(Clone)]
pub struct CatalogClient {
  http: reqwest::Client,
  url: String,
}

impl CatalogClient {
  pub fn new(config: &Config) -> Self {
    Self {
      http: reqwest::Client::new(),
      url: config.catalog.url.clone(),
    }
  }

  /// Fetch the product list from the remote feed.
  pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
    let response = self.http.get(&self.url).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(CatalogError::Status(status));
    }

    let body = response.text().await?;
    let products = serde_json::from_str(&body)?;

    Ok(products)
  }
}
