use color_eyre::Result;
use crossterm::event::{
  DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers,
};
use crossterm::terminal::{
  disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::catalog::CachedCatalogClient;
use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::favorites::FavoritesStore;
use crate::storage::SqliteStorage;
use crate::ui::{self, CarouselAction, CarouselView};

/// Main application state
pub struct App {
  config: Config,
  carousel: CarouselView<SqliteStorage>,
  should_quit: bool,
}

impl App {
  /// Resolve the catalog and build the carousel. This completes before
  /// the event loop starts, so no interaction handler can run on partial
  /// data; the catalog fetch is the only await point.
  pub async fn new(config: Config) -> Result<Self> {
    let storage = match &config.storage_path {
      Some(path) => SqliteStorage::open_at(path)?,
      None => SqliteStorage::open()?,
    };
    let storage = Arc::new(storage);

    let catalog = CachedCatalogClient::new(&config, Arc::clone(&storage));
    let products = catalog.get_products().await?;
    info!("resolved {} products", products.len());

    let favorites = Arc::new(FavoritesStore::new(storage));
    let carousel = CarouselView::new(products, favorites);

    Ok(Self {
      config,
      carousel,
      should_quit: false,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut events = EventHandler::new(Duration::from_millis(250));

    // Main loop
    while !self.should_quit {
      terminal.draw(|frame| ui::draw(frame, self))?;

      if let Some(event) = events.next().await {
        self.handle_event(event);
      }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
  }

  fn handle_event(&mut self, event: Event) {
    match event {
      Event::Key(key) => self.handle_key(key),
      Event::Mouse(mouse) => {
        let action = self.carousel.handle_mouse(mouse);
        self.execute(action);
      }
      Event::Tick => {} // UI refresh happens automatically
    }
  }

  fn handle_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('q') => self.should_quit = true,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.should_quit = true;
      }
      _ => {
        let action = self.carousel.handle_key(key);
        self.execute(action);
      }
    }
  }

  fn execute(&mut self, action: CarouselAction) {
    match action {
      CarouselAction::None => {}
      CarouselAction::OpenUrl(url) => open_url(&url),
    }
  }

  pub fn title(&self) -> &str {
    self.config.title()
  }

  pub fn carousel_mut(&mut self) -> &mut CarouselView<SqliteStorage> {
    &mut self.carousel
  }
}

/// Hand a url to the platform opener. Best-effort: failures are logged and
/// never surfaced in the UI.
fn open_url(url: &str) {
  let result = if cfg!(target_os = "macos") {
    Command::new("open")
      .arg(url)
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn()
  } else if cfg!(target_os = "windows") {
    Command::new("cmd").args(["/C", "start", "", url]).spawn()
  } else {
    Command::new("xdg-open")
      .arg(url)
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn()
  };

  match result {
    Ok(_) => info!("opened {}", url),
    Err(e) => warn!("Failed to open {}: {}", url, e),
  }
}
