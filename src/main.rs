mod app;
mod catalog;
mod config;
mod event;
mod favorites;
mod storage;
mod ui;

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "alsolike")]
#[command(about = "A terminal related-products carousel with persistent favorites")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/alsolike/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Catalog feed url override
  #[arg(short, long)]
  url: Option<String>,
}

/// Logs go to a file under the data dir; the TUI owns the terminal.
fn init_tracing() -> Result<tracing_appender::non_blocking::WorkerGuard> {
  let log_dir = dirs::data_dir()
    .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
    .ok_or_else(|| eyre!("Could not determine data directory"))?
    .join("alsolike");

  let appender = tracing_appender::rolling::never(log_dir, "alsolike.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  // RUST_LOG controls the level (e.g. RUST_LOG=debug)
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(writer).with_ansi(false))
    .with(filter)
    .init();

  Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();
  let _guard = init_tracing()?;

  // Load configuration
  let config = config::Config::load(args.config.as_deref())?;

  // Override the feed url if specified on the command line
  let config = if let Some(url) = args.url {
    url::Url::parse(&url).map_err(|e| eyre!("Invalid catalog url {}: {}", url, e))?;
    config::Config {
      catalog: config::CatalogConfig { url },
      ..config
    }
  } else {
    config
  };

  // Initialize and run the app
  let mut app = app::App::new(config).await?;
  app.run().await?;

  Ok(())
}
