//! Key/value storage port backing the catalog cache and favorites store.
//!
//! Values are string-serialized JSON; keys are fixed constants. Backends
//! are pluggable so tests substitute an in-memory store for the SQLite
//! database.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use color_eyre::Result;

/// Storage key for the persisted product catalog.
pub const CATALOG_KEY: &str = "carouselProductList";

/// Storage key for the persisted favorites set.
pub const FAVORITES_KEY: &str = "favorites";

/// Pluggable string key/value store.
pub trait KeyValueStorage: Send + Sync {
  /// Read the value stored under `key`, if any.
  fn get(&self, key: &str) -> Result<Option<String>>;

  /// Store `value` under `key`, replacing any previous entry.
  fn set(&self, key: &str, value: &str) -> Result<()>;
}
