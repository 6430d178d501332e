//! Catalog client with transparent cache-first resolution.

use color_eyre::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::storage::KeyValueStorage;

use super::cache::CatalogCache;
use super::client::CatalogClient;
use super::types::Product;

/// Catalog client wrapped with the persistent cache.
///
/// Same surface as [`CatalogClient`], but the remote feed is contacted at
/// most once per storage lifetime.
pub struct CachedCatalogClient<S: KeyValueStorage> {
  inner: CatalogClient,
  cache: CatalogCache<S>,
}

impl<S: KeyValueStorage> CachedCatalogClient<S> {
  pub fn new(config: &Config, storage: Arc<S>) -> Self {
    Self {
      inner: CatalogClient::new(config),
      cache: CatalogCache::new(storage),
    }
  }

  /// Resolve the product list for the carousel.
  pub async fn get_products(&self) -> Result<Vec<Product>> {
    let inner = self.inner.clone();
    self
      .cache
      .resolve(|| async move { inner.fetch_products().await })
      .await
  }
}
