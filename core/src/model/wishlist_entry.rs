// basket/src/model/wishlist_entry.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A saved-for-later product reference.
///
/// Keyed by `product.id`; `date_added` is stamped once on insertion and
/// never changes, re-adding the same product is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
  #[serde(flatten)]
  pub product: Product,
  pub date_added: DateTime<Utc>,
}

impl WishlistEntry {
  pub fn new(product: Product) -> Self {
    WishlistEntry {
      product,
      date_added: Utc::now(),
    }
  }

  pub fn id(&self) -> &str {
    &self.product.id
  }
}
