//! The carousel controller: card states, selection, favorite wiring, and
//! paged horizontal scrolling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::sync::Arc;
use tracing::warn;

use crate::catalog::Product;
use crate::favorites::FavoritesStore;
use crate::storage::KeyValueStorage;

use super::cards;
use super::styles;

/// Cards scrolled per navigation trigger.
pub const PAGE_SIZE: u16 = 3;

/// Horizontal gap between cards, in cells.
pub const CARD_GAP: u16 = 2;

/// Preferred card width, in cells. Narrow strips shrink the card instead
/// of overflowing; paging always uses the measured width.
const CARD_WIDTH: u16 = 24;

/// Card height: borders plus heart, image, name and price lines.
const CARD_HEIGHT: u16 = 7;

/// Below this width the prev/next controls are hidden and the strip takes
/// the full row.
pub const NAV_BREAKPOINT: u16 = 80;

/// Action produced by an interaction, executed by the app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselAction {
  /// Nothing for the app to do
  None,
  /// Open the product url in the system browser
  OpenUrl(String),
}

/// One card and its transient favorited render flag. The favorites store
/// owns the canonical set; this flag only mirrors it.
struct CardState {
  product: Product,
  favorited: bool,
}

/// Regions recorded at render time for mouse dispatch.
#[derive(Debug, Clone, Copy)]
struct CardHit {
  index: usize,
  card: Rect,
  favorite: Rect,
}

#[derive(Debug, Clone, Copy, Default)]
struct NavHit {
  prev: Option<Rect>,
  next: Option<Rect>,
}

/// Carousel over the resolved catalog.
pub struct CarouselView<S: KeyValueStorage> {
  favorites: Arc<FavoritesStore<S>>,
  cards: Vec<CardState>,
  selected: usize,
  /// Horizontal scroll offset of the strip, in cells
  offset: u16,
  /// Measured width of the first rendered card, set at layout time
  card_width: Option<u16>,
  /// Strip viewport width from the last layout
  viewport_width: u16,
  hits: Vec<CardHit>,
  nav: NavHit,
}

impl<S: KeyValueStorage> CarouselView<S> {
  /// Build card states from the catalog in order, seeding each favorited
  /// flag from the store. Runs once at initialization.
  pub fn new(products: Vec<Product>, favorites: Arc<FavoritesStore<S>>) -> Self {
    let cards = products
      .into_iter()
      .map(|product| {
        let favorited = favorites.is_favorite(&product.id);
        CardState { product, favorited }
      })
      .collect();

    Self {
      favorites,
      cards,
      selected: 0,
      offset: 0,
      card_width: None,
      viewport_width: 0,
      hits: Vec::new(),
      nav: NavHit::default(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  pub fn offset(&self) -> u16 {
    self.offset
  }

  pub fn selected(&self) -> usize {
    self.selected
  }

  /// The favorited render flag of the card at `index`.
  pub fn card_favorited(&self, index: usize) -> Option<bool> {
    self.cards.get(index).map(|c| c.favorited)
  }

  /// Measure the strip for the given viewport. Runs on every render, so
  /// the page step follows layout changes between navigations.
  pub fn layout(&mut self, strip: Rect) {
    self.viewport_width = strip.width;
    self.card_width = if self.cards.is_empty() {
      None
    } else {
      Some(CARD_WIDTH.min(strip.width.max(1)))
    };
    // a resize may have shrunk the strip's natural bounds
    self.offset = self.offset.min(self.max_offset());
  }

  fn max_offset(&self) -> u16 {
    let Some(width) = self.card_width else {
      return 0;
    };
    let count = self.cards.len() as u32;
    if count == 0 {
      return 0;
    }
    let content = count * u32::from(width) + (count - 1) * u32::from(CARD_GAP);
    content
      .saturating_sub(u32::from(self.viewport_width))
      .min(u32::from(u16::MAX)) as u16
  }

  /// Page step: measured card width plus gap, times the page size.
  fn page_step(&self) -> Option<i32> {
    self
      .card_width
      .map(|w| (i32::from(w) + i32::from(CARD_GAP)) * i32::from(PAGE_SIZE))
  }

  /// Scroll one page toward the end of the strip.
  pub fn page_next(&mut self) {
    if let Some(step) = self.page_step() {
      self.scroll_by(step);
    }
  }

  /// Scroll one page toward the start of the strip.
  pub fn page_prev(&mut self) {
    if let Some(step) = self.page_step() {
      self.scroll_by(-step);
    }
  }

  /// Apply a relative scroll delta, absorbed at the strip's natural bounds.
  fn scroll_by(&mut self, delta: i32) {
    if self.cards.is_empty() {
      return;
    }
    let target = i32::from(self.offset) + delta;
    self.offset = target.clamp(0, i32::from(self.max_offset())) as u16;
  }

  fn select_next(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    self.selected = (self.selected + 1).min(self.cards.len() - 1);
    self.scroll_selected_into_view();
  }

  fn select_prev(&mut self) {
    self.selected = self.selected.saturating_sub(1);
    self.scroll_selected_into_view();
  }

  /// Scroll just enough to keep the selected card fully visible.
  fn scroll_selected_into_view(&mut self) {
    let Some(width) = self.card_width else {
      return;
    };
    let stride = i32::from(width) + i32::from(CARD_GAP);
    let left = self.selected as i32 * stride;
    let right = left + i32::from(width);
    let offset = i32::from(self.offset);
    let viewport = i32::from(self.viewport_width);

    if left < offset {
      self.scroll_by(left - offset);
    } else if right > offset + viewport {
      self.scroll_by(right - (offset + viewport));
    }
  }

  /// Toggle the card at `index` against the store, then refresh only that
  /// card's render flag from the returned set.
  fn toggle_at(&mut self, index: usize) {
    let Some(card) = self.cards.get_mut(index) else {
      return;
    };
    match self.favorites.toggle(&card.product.id) {
      Ok(set) => card.favorited = set.contains(&card.product.id),
      // the flag stays on whatever was last committed
      Err(e) => warn!("Failed to persist favorite toggle: {}", e),
    }
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> CarouselAction {
    match key.code {
      KeyCode::Right | KeyCode::Char('n') => {
        self.page_next();
        CarouselAction::None
      }
      KeyCode::Left | KeyCode::Char('p') => {
        self.page_prev();
        CarouselAction::None
      }
      KeyCode::Tab | KeyCode::Char('l') => {
        self.select_next();
        CarouselAction::None
      }
      KeyCode::BackTab | KeyCode::Char('h') => {
        self.select_prev();
        CarouselAction::None
      }
      KeyCode::Char('f') => {
        self.toggle_at(self.selected);
        CarouselAction::None
      }
      KeyCode::Enter => match self.cards.get(self.selected) {
        Some(card) => CarouselAction::OpenUrl(card.product.url.clone()),
        None => CarouselAction::None,
      },
      _ => CarouselAction::None,
    }
  }

  pub fn handle_mouse(&mut self, mouse: MouseEvent) -> CarouselAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
      return CarouselAction::None;
    }
    self.handle_click(Position::new(mouse.column, mouse.row))
  }

  /// Dispatch a click against the regions recorded at render time.
  ///
  /// The favorite affordance is tested before the card body: the regions
  /// overlap, and a toggle must never also open the product page.
  pub fn handle_click(&mut self, pos: Position) -> CarouselAction {
    if self.nav.prev.is_some_and(|r| r.contains(pos)) {
      self.page_prev();
      return CarouselAction::None;
    }
    if self.nav.next.is_some_and(|r| r.contains(pos)) {
      self.page_next();
      return CarouselAction::None;
    }

    let favorite = self
      .hits
      .iter()
      .find(|h| h.favorite.contains(pos))
      .map(|h| h.index);
    if let Some(index) = favorite {
      self.selected = index;
      self.toggle_at(index);
      return CarouselAction::None;
    }

    let card = self
      .hits
      .iter()
      .find(|h| h.card.contains(pos))
      .map(|h| h.index);
    if let Some(index) = card {
      self.selected = index;
      return CarouselAction::OpenUrl(self.cards[index].product.url.clone());
    }

    CarouselAction::None
  }

  /// Draw the nav controls and the scrollable strip, recording hit regions
  /// for mouse dispatch.
  pub fn render(&mut self, frame: &mut Frame, area: Rect) {
    let show_nav = area.width >= NAV_BREAKPOINT;
    let (prev_area, strip, next_area) = if show_nav {
      let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
          Constraint::Length(3),
          Constraint::Min(1),
          Constraint::Length(3),
        ])
        .split(area);
      (Some(chunks[0]), chunks[1], Some(chunks[2]))
    } else {
      (None, area, None)
    };

    self.layout(strip);
    self.nav = NavHit {
      prev: prev_area,
      next: next_area,
    };
    self.hits.clear();

    if let Some(prev) = prev_area {
      frame.render_widget(
        Paragraph::new("<")
          .alignment(Alignment::Center)
          .style(styles::nav_style()),
        prev,
      );
    }
    if let Some(next) = next_area {
      frame.render_widget(
        Paragraph::new(">")
          .alignment(Alignment::Center)
          .style(styles::nav_style()),
        next,
      );
    }

    let Some(width) = self.card_width else {
      return;
    };
    let card_height = CARD_HEIGHT.min(strip.height);
    let stride = i32::from(width) + i32::from(CARD_GAP);

    for (i, card) in self.cards.iter().enumerate() {
      let virtual_x = i as i32 * stride - i32::from(self.offset);
      if virtual_x + i32::from(width) <= 0 || virtual_x >= i32::from(strip.width) {
        continue;
      }

      // clip partially scrolled-out cards to the strip
      let left = virtual_x.max(0) as u16;
      let right = (virtual_x + i32::from(width)).min(i32::from(strip.width)) as u16;
      let rect = Rect {
        x: strip.x + left,
        y: strip.y,
        width: right - left,
        height: card_height,
      };

      let border_style = if i == self.selected {
        styles::selected_border_style()
      } else {
        styles::card_border_style()
      };
      let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
      let inner = block.inner(rect);
      frame.render_widget(block, rect);
      frame.render_widget(
        Paragraph::new(cards::card_lines(&card.product, card.favorited, inner.width)),
        inner,
      );

      // the affordance region is the top-right corner of the interior
      let favorite = Rect {
        x: inner.x + inner.width.saturating_sub(3),
        y: inner.y,
        width: inner.width.min(3),
        height: inner.height.min(1),
      };
      self.hits.push(CardHit {
        index: i,
        card: rect,
        favorite,
      });
    }
  }
}
