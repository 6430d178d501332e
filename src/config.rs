use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Default product feed: a static JSON array of `{id, img, name, price, url}`.
pub const DEFAULT_CATALOG_URL: &str = "https://gist.githubusercontent.com/sevindi/5765c5812bbc8238a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f372/products.json";

const DEFAULT_TITLE: &str = "You Might Also Like";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub catalog: CatalogConfig,
  /// Heading shown above the carousel (defaults to "You Might Also Like")
  pub title: Option<String>,
  /// Override for the storage database path
  pub storage_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
  /// Feed url returning the JSON product array
  pub url: String,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    Self {
      url: DEFAULT_CATALOG_URL.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./alsolike.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/alsolike/config.yaml
  ///
  /// A missing file is not an error; defaults apply.
  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      return Self::from_file(path);
    }

    let local = Path::new("alsolike.yaml");
    if local.exists() {
      return Self::from_file(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
      let path = config_dir.join("alsolike").join("config.yaml");
      if path.exists() {
        return Self::from_file(&path);
      }
    }

    Ok(Self::default())
  }

  fn from_file(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config {}: {}", path.display(), e))?;
    Self::parse(&contents).map_err(|e| eyre!("Invalid config {}: {}", path.display(), e))
  }

  fn parse(contents: &str) -> Result<Self> {
    let config: Config =
      serde_yaml::from_str(contents).map_err(|e| eyre!("Failed to parse config: {}", e))?;

    Url::parse(&config.catalog.url)
      .map_err(|e| eyre!("Invalid catalog url {}: {}", config.catalog.url, e))?;

    Ok(config)
  }

  pub fn title(&self) -> &str {
    self.title.as_deref().unwrap_or(DEFAULT_TITLE)
  }
}
