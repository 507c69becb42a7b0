// basket/src/model/product.rs

use serde::{Deserialize, Serialize};

/// A fully-formed product record, as handed to the session store by the
/// remote catalog layer. The store never fetches these itself.
///
/// Prices are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub image: String,
  pub category: String,
  pub price_cents: i64,
  /// Pre-discount price, when the product is on sale.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_price_cents: Option<i64>,
}
