//! Cache-first catalog resolution over the storage port.

use color_eyre::Result;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

use crate::storage::{KeyValueStorage, CATALOG_KEY};

use super::error::CatalogError;
use super::types::Product;

/// Resolves the product list, preferring the persisted copy.
///
/// Once a catalog has been persisted it is never refreshed for the lifetime
/// of the storage entry: the feed is effectively static per session, so the
/// first write wins. There is no expiry.
pub struct CatalogCache<S: KeyValueStorage> {
  storage: Arc<S>,
}

impl<S: KeyValueStorage> CatalogCache<S> {
  pub fn new(storage: Arc<S>) -> Self {
    Self { storage }
  }

  /// Resolve the product list: the persisted copy if present, else the
  /// fetcher, whose result is persisted before returning.
  ///
  /// A persisted entry that no longer parses is an error, not a cache
  /// miss; silently refetching would hide a corrupted store.
  pub async fn resolve<F, Fut>(&self, fetcher: F) -> Result<Vec<Product>>
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Product>, CatalogError>>,
  {
    if let Some(stored) = self.storage.get(CATALOG_KEY)? {
      debug!("catalog served from storage");
      let products: Vec<Product> = serde_json::from_str(&stored).map_err(CatalogError::Parse)?;
      return Ok(products);
    }

    debug!("catalog not in storage, fetching");
    let products = fetcher().await?;

    let serialized = serde_json::to_string(&products).map_err(CatalogError::Parse)?;
    self.storage.set(CATALOG_KEY, &serialized)?;

    Ok(products)
  }
}

impl<S: KeyValueStorage> Clone for CatalogCache<S> {
  fn clone(&self) -> Self {
    Self {
      storage: Arc::clone(&self.storage),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::types::{Price, ProductId};
  use crate::storage::MemoryStorage;
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn product(id: u64, name: &str) -> Product {
    Product {
      id: ProductId::Num(id),
      img: format!("https://cdn.example/{}.jpg", id),
      name: name.to_string(),
      price: Price::Num(99.5),
      url: format!("https://shop.example/{}", id),
    }
  }

  #[tokio::test]
  async fn test_first_resolve_fetches_and_persists() {
    let storage = Arc::new(MemoryStorage::new());
    let cache = CatalogCache::new(Arc::clone(&storage));

    let products = cache
      .resolve(|| async { Ok(vec![product(1, "Crew Neck")]) })
      .await
      .unwrap();

    assert_eq!(products.len(), 1);
    assert!(storage.get(CATALOG_KEY).unwrap().is_some());
  }

  #[tokio::test]
  async fn test_second_resolve_skips_fetch_and_matches() {
    let storage = Arc::new(MemoryStorage::new());
    let cache = CatalogCache::new(Arc::clone(&storage));
    let fetches = AtomicUsize::new(0);

    let first = cache
      .resolve(|| async {
        fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![product(1, "Crew Neck"), product(2, "Parka")])
      })
      .await
      .unwrap();
    let stored_after_first = storage.get(CATALOG_KEY).unwrap();

    let second = cache
      .resolve(|| async {
        fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
      })
      .await
      .unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert_eq!(second, first);
    assert_eq!(storage.get(CATALOG_KEY).unwrap(), stored_after_first);
  }

  #[tokio::test]
  async fn test_fetch_error_propagates_and_persists_nothing() {
    let storage = Arc::new(MemoryStorage::new());
    let cache = CatalogCache::new(Arc::clone(&storage));

    let result = cache
      .resolve(|| async {
        Err(CatalogError::Parse(
          serde_json::from_str::<Vec<Product>>("not json").unwrap_err(),
        ))
      })
      .await;

    assert!(result.is_err());
    assert_eq!(storage.get(CATALOG_KEY).unwrap(), None);
  }

  #[tokio::test]
  async fn test_corrupt_persisted_catalog_is_a_parse_error() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(CATALOG_KEY, "{broken").unwrap();
    let cache = CatalogCache::new(Arc::clone(&storage));

    let err = cache
      .resolve(|| async { Ok(Vec::new()) })
      .await
      .unwrap_err();

    assert!(matches!(
      err.downcast_ref::<CatalogError>(),
      Some(CatalogError::Parse(_))
    ));
  }
}
