use color_eyre::{eyre::eyre, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStorage;

/// In-memory storage backend for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let entries = self
      .entries
      .lock()
      .map_err(|e| eyre!("Lock poisoned: {}", e))?;
    Ok(entries.get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let mut entries = self
      .entries
      .lock()
      .map_err(|e| eyre!("Lock poisoned: {}", e))?;
    entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("nope").unwrap(), None);
  }

  #[test]
  fn test_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "[1,2,3]").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("[1,2,3]"));
  }

  #[test]
  fn test_set_replaces_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "old").unwrap();
    storage.set("k", "new").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
  }
}
