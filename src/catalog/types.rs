use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier as it appears in the feed: numeric or string.
///
/// Kept untagged so the persisted catalog round-trips the feed unchanged
/// and favorites written against one feed keep matching it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
  Num(u64),
  Str(String),
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductId::Num(n) => write!(f, "{}", n),
      ProductId::Str(s) => write!(f, "{}", s),
    }
  }
}

/// Price as it appears in the feed: numeric or preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
  Num(f64),
  Str(String),
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Price::Num(n) => write!(f, "{:.2}", n),
      Price::Str(s) => write!(f, "{}", s),
    }
  }
}

/// A product in the related-items catalog. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub img: String,
  pub name: String,
  pub price: Price,
  pub url: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_deserialize_numeric_fields() {
    let json = r#"{"id":1,"img":"https://cdn.example/1.jpg","name":"Crew Neck","price":109.99,"url":"https://shop.example/1"}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id, ProductId::Num(1));
    assert_eq!(product.price, Price::Num(109.99));
  }

  #[test]
  fn test_deserialize_string_fields() {
    let json = r#"{"id":"sku-7","img":"a.jpg","name":"Parka","price":"1.299,00 TL","url":"https://shop.example/7"}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id, ProductId::Str("sku-7".to_string()));
    assert_eq!(product.price, Price::Str("1.299,00 TL".to_string()));
  }

  #[test]
  fn test_untagged_id_roundtrip() {
    let ids = vec![ProductId::Num(42), ProductId::Str("sku-7".to_string())];
    let json = serde_json::to_string(&ids).unwrap();
    assert_eq!(json, r#"[42,"sku-7"]"#);
    let back: Vec<ProductId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ids);
  }

  #[test]
  fn test_id_display() {
    assert_eq!(ProductId::Num(3).to_string(), "3");
    assert_eq!(ProductId::Str("sku-7".to_string()).to_string(), "sku-7");
  }
}
