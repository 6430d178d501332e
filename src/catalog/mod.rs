//! Product catalog: feed models, remote client, and cache-first resolution.

mod cache;
mod cached_client;
mod client;
mod error;
mod types;

pub use cache::CatalogCache;
pub use cached_client::CachedCatalogClient;
pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{Price, Product, ProductId};
