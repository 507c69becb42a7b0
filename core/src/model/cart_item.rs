// basket/src/model/cart_item.rs

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Upper bound applied to new cart lines when the product carries no
/// explicit stock limit. Advisory: the store itself never clamps, quantity
/// controls in the calling layer are expected to respect it.
pub const DEFAULT_MAX_QUANTITY: i64 = 10;

/// One product-and-quantity row in the cart.
///
/// Keyed by `product.id`: the cart never holds two lines for the same
/// product, repeat adds merge into the existing line's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
  #[serde(flatten)]
  pub product: Product,
  pub quantity: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_quantity: Option<i64>,
}

impl CartLineItem {
  /// Builds a new line for `product`, with the default advisory bound.
  pub fn new(product: Product, quantity: i64) -> Self {
    CartLineItem {
      product,
      quantity,
      max_quantity: Some(DEFAULT_MAX_QUANTITY),
    }
  }

  pub fn id(&self) -> &str {
    &self.product.id
  }

  pub fn line_subtotal_cents(&self) -> i64 {
    self.product.price_cents * self.quantity
  }

  /// The advisory quantity ceiling for this line.
  pub fn effective_max_quantity(&self) -> i64 {
    self.max_quantity.unwrap_or(DEFAULT_MAX_QUANTITY)
  }
}
