use ratatui::style::{Color, Modifier, Style};

// Color palette
pub const ACCENT: Color = Color::Blue;
pub const MUTED: Color = Color::DarkGray;

pub fn heading_style() -> Style {
  Style::default().add_modifier(Modifier::BOLD)
}

pub fn price_style() -> Style {
  Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn favorited_style() -> Style {
  Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn unfavorited_style() -> Style {
  Style::default().fg(Color::White)
}

pub fn image_style() -> Style {
  Style::default().fg(MUTED)
}

pub fn nav_style() -> Style {
  Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn card_border_style() -> Style {
  Style::default().fg(MUTED)
}

pub fn selected_border_style() -> Style {
  Style::default().fg(ACCENT)
}

pub fn hint_style() -> Style {
  Style::default().fg(MUTED)
}
