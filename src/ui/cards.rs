//! Pure card rendering: a product and its favorited flag to view lines.
//!
//! Nothing here touches the terminal or the controller; placement and
//! event wiring belong to the caller.

use ratatui::prelude::*;

use crate::catalog::Product;

use super::styles;

/// Favorite indicator glyphs.
pub const HEART_FAVORITED: &str = "\u{2665}"; // ♥
pub const HEART_UNFAVORITED: &str = "\u{2661}"; // ♡

/// Build the text lines for one product card of interior width `width`.
pub fn card_lines(product: &Product, favorited: bool, width: u16) -> Vec<Line<'static>> {
  let width = width as usize;
  let heart = if favorited {
    Span::styled(HEART_FAVORITED, styles::favorited_style())
  } else {
    Span::styled(HEART_UNFAVORITED, styles::unfavorited_style())
  };

  vec![
    Line::from(heart).alignment(Alignment::Right),
    Line::from(Span::styled(
      truncate(&image_label(&product.img), width),
      styles::image_style(),
    )),
    Line::from(truncate(&product.name, width)),
    Line::from(Span::styled(
      truncate(&product.price.to_string(), width),
      styles::price_style(),
    )),
  ]
}

/// Truncate to `max` characters, appending "..." if cut. Character-based,
/// not byte-based: product names are routinely non-ASCII.
pub fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_string();
  }
  let kept: String = s.chars().take(max.saturating_sub(3)).collect();
  format!("{}...", kept)
}

/// Short label for an image url: its final path segment, bracketed.
pub fn image_label(img_url: &str) -> String {
  let trimmed = img_url.trim_end_matches('/');
  let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
  format!("[{}]", segment)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{Price, ProductId};

  fn product() -> Product {
    Product {
      id: ProductId::Num(1),
      img: "https://cdn.example/images/crew-neck.jpg".to_string(),
      name: "Crew Neck T-Shirt".to_string(),
      price: Price::Num(109.99),
      url: "https://shop.example/crew-neck".to_string(),
    }
  }

  fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
  }

  #[test]
  fn test_card_shows_name_and_price() {
    let lines = card_lines(&product(), false, 22);
    let texts: Vec<String> = lines.iter().map(line_text).collect();
    assert!(texts.iter().any(|t| t.contains("Crew Neck T-Shirt")));
    assert!(texts.iter().any(|t| t.contains("109.99")));
  }

  #[test]
  fn test_heart_follows_favorited_flag() {
    let plain = card_lines(&product(), false, 22);
    assert_eq!(line_text(&plain[0]), HEART_UNFAVORITED);

    let favorited = card_lines(&product(), true, 22);
    assert_eq!(line_text(&favorited[0]), HEART_FAVORITED);
  }

  #[test]
  fn test_truncate_is_character_safe() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("hello world", 8), "hello...");
    // Turkish product names must not split a multi-byte character
    assert_eq!(truncate("ÇEKETLİ ÜRÜN MODELİ", 10), "ÇEKETLİ...");
  }

  #[test]
  fn test_image_label_uses_final_segment() {
    assert_eq!(
      image_label("https://cdn.example/images/crew-neck.jpg"),
      "[crew-neck.jpg]"
    );
    assert_eq!(image_label("plain.jpg"), "[plain.jpg]");
  }
}
