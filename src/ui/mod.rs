mod carousel;
mod cards;
mod styles;

pub use carousel::{CarouselAction, CarouselView};

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

/// Minimum frame that can host the carousel. A smaller frame skips it
/// silently, the way the widget is discarded when its host marker is
/// missing; the status bar still renders.
const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 11;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // heading
      Constraint::Min(1),    // carousel strip
      Constraint::Length(1), // status bar
    ])
    .split(frame.area());

  draw_status_bar(frame, chunks[2]);

  if frame.area().width < MIN_WIDTH || frame.area().height < MIN_HEIGHT {
    return;
  }

  let heading = Paragraph::new(app.title().to_string()).style(styles::heading_style());
  frame.render_widget(heading, chunks[0]);

  app.carousel_mut().render(frame, chunks[1]);
}

fn draw_status_bar(frame: &mut Frame, area: Rect) {
  let hint = " \u{2190}/\u{2192}:page  Tab:select  f:favorite  Enter:open  q:quit";
  let paragraph = Paragraph::new(hint).style(styles::hint_style());
  frame.render_widget(paragraph, area);
}
