use thiserror::Error;

/// Errors from catalog resolution.
///
/// These propagate to whatever invoked initialization; there is no retry
/// and no partial render on failure.
#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("Network error fetching catalog: {0}")]
  Fetch(#[from] reqwest::Error),

  #[error("Catalog request failed with status {0}")]
  Status(reqwest::StatusCode),

  #[error("Malformed catalog JSON: {0}")]
  Parse(#[from] serde_json::Error),
}
