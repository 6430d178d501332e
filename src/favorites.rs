//! Persistent favorites: the set of product ids the user has marked.

use color_eyre::{eyre::eyre, Result};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::catalog::ProductId;
use crate::storage::{KeyValueStorage, FAVORITES_KEY};

/// Favorites store over the storage port.
///
/// The persisted entry is the canonical copy. An in-process cache is kept
/// write-through, so a membership check after a committed toggle never
/// reads stale data. An absent or unreadable entry is an empty set, never
/// an error.
pub struct FavoritesStore<S: KeyValueStorage> {
  storage: Arc<S>,
  cached: Mutex<Option<BTreeSet<ProductId>>>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
  pub fn new(storage: Arc<S>) -> Self {
    Self {
      storage,
      cached: Mutex::new(None),
    }
  }

  /// Current favorites set, loaded lazily on first read.
  pub fn favorites(&self) -> BTreeSet<ProductId> {
    let mut cached = self.cached.lock().unwrap_or_else(|p| p.into_inner());
    if let Some(set) = cached.as_ref() {
      return set.clone();
    }
    let set = self.load();
    *cached = Some(set.clone());
    set
  }

  /// Membership test against the latest committed set.
  pub fn is_favorite(&self, id: &ProductId) -> bool {
    self.favorites().contains(id)
  }

  /// Toggle `id`: remove it if present, insert it otherwise. The updated
  /// set is persisted before this returns, then handed back to the caller.
  pub fn toggle(&self, id: &ProductId) -> Result<BTreeSet<ProductId>> {
    let mut set = self.favorites();
    if !set.remove(id) {
      set.insert(id.clone());
    }

    let serialized =
      serde_json::to_string(&set).map_err(|e| eyre!("Failed to serialize favorites: {}", e))?;
    self.storage.set(FAVORITES_KEY, &serialized)?;

    // cache is updated only after the write commits
    let mut cached = self.cached.lock().unwrap_or_else(|p| p.into_inner());
    *cached = Some(set.clone());

    Ok(set)
  }

  fn load(&self) -> BTreeSet<ProductId> {
    match self.storage.get(FAVORITES_KEY) {
      Ok(Some(stored)) => serde_json::from_str(&stored).unwrap_or_else(|e| {
        warn!("Discarding unreadable favorites entry: {}", e);
        BTreeSet::new()
      }),
      Ok(None) => BTreeSet::new(),
      Err(e) => {
        warn!("Failed to read favorites, treating as empty: {}", e);
        BTreeSet::new()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryStorage;

  fn store() -> FavoritesStore<MemoryStorage> {
    FavoritesStore::new(Arc::new(MemoryStorage::new()))
  }

  fn id(n: u64) -> ProductId {
    ProductId::Num(n)
  }

  #[test]
  fn test_empty_on_fresh_storage() {
    let store = store();
    assert!(store.favorites().is_empty());
    assert!(!store.is_favorite(&id(1)));
  }

  #[test]
  fn test_toggle_is_visible_immediately() {
    let store = store();
    let set = store.toggle(&id(1)).unwrap();
    assert!(set.contains(&id(1)));
    assert!(store.is_favorite(&id(1)));
  }

  #[test]
  fn test_toggle_parity() {
    let store = store();
    for _ in 0..4 {
      store.toggle(&id(7)).unwrap();
    }
    assert!(!store.is_favorite(&id(7)));

    for _ in 0..3 {
      store.toggle(&id(7)).unwrap();
    }
    assert!(store.is_favorite(&id(7)));
  }

  #[test]
  fn test_ids_are_isolated() {
    let store = store();
    store.toggle(&id(1)).unwrap();
    assert!(store.is_favorite(&id(1)));
    assert!(!store.is_favorite(&id(2)));
    assert!(!store.is_favorite(&ProductId::Str("1".to_string())));
  }

  #[test]
  fn test_unreadable_entry_is_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(FAVORITES_KEY, "{definitely not json").unwrap();
    let store = FavoritesStore::new(storage);
    assert!(store.favorites().is_empty());
  }

  #[test]
  fn test_persists_across_store_instances() {
    let storage = Arc::new(MemoryStorage::new());

    let first = FavoritesStore::new(Arc::clone(&storage));
    first.toggle(&id(9)).unwrap();

    let second = FavoritesStore::new(storage);
    assert!(second.is_favorite(&id(9)));
  }

  #[test]
  fn test_persisted_shape_is_a_json_array() {
    let storage = Arc::new(MemoryStorage::new());
    let store = FavoritesStore::new(Arc::clone(&storage));
    store.toggle(&id(2)).unwrap();
    store.toggle(&id(1)).unwrap();

    let stored = storage.get(FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(stored, "[1,2]");
  }
}
