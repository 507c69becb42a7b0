// basket/src/store.rs

//! The cart/wishlist state container: the single source of truth for a
//! shopping session.
//!
//! Every mutation updates the in-memory collection first, then mirrors it
//! to storage, then tells the notification sink what happened. There are no
//! network calls here, no async, and no fatal errors; a storage failure
//! must never block shopping.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::model::{CartLineItem, Product, WishlistEntry};
use crate::notify::{Notification, NotificationKind, NotificationSink};
use crate::persisted::Persisted;
use crate::storage::StateStorage;
use crate::totals::{CartTotals, PricingRules};

/// Storage keys and pricing knobs for a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub cart_key: String,
  pub wishlist_key: String,
  pub pricing: PricingRules,
}

impl Default for StoreConfig {
  fn default() -> Self {
    StoreConfig {
      cart_key: "cart_items".to_string(),
      wishlist_key: "wishlist_items".to_string(),
      pricing: PricingRules::default(),
    }
  }
}

/// Holds the cart and wishlist for one session, rehydrated from storage at
/// construction and mirrored back on every mutation.
///
/// Collections are only reachable through the operations below, so the
/// quantity invariant (every line's quantity is at least 1) and the
/// one-line-per-product-id invariant hold at all times. A product may sit
/// in the cart and the wishlist simultaneously; the two collections are not
/// mutually exclusive.
pub struct SessionStore {
  cart: Persisted<Vec<CartLineItem>>,
  wishlist: Persisted<Vec<WishlistEntry>>,
  sink: Arc<dyn NotificationSink>,
  pricing: PricingRules,
}

impl SessionStore {
  pub fn new(storage: Arc<dyn StateStorage>, sink: Arc<dyn NotificationSink>) -> Self {
    Self::with_config(storage, sink, StoreConfig::default())
  }

  pub fn with_config(
    storage: Arc<dyn StateStorage>,
    sink: Arc<dyn NotificationSink>,
    config: StoreConfig,
  ) -> Self {
    let cart = Persisted::new(Arc::clone(&storage), config.cart_key, Vec::new());
    let wishlist = Persisted::new(storage, config.wishlist_key, Vec::new());
    SessionStore {
      cart,
      wishlist,
      sink,
      pricing: config.pricing,
    }
  }

  // --- Cart ---

  pub fn cart_items(&self) -> &[CartLineItem] {
    self.cart.get()
  }

  /// Derived totals for the current cart contents. Recomputed on every
  /// call, never cached.
  pub fn cart_total(&self) -> CartTotals {
    CartTotals::compute(self.cart.get(), &self.pricing)
  }

  /// Adds `quantity` of `product` to the cart.
  ///
  /// A repeat add merges into the existing line: quantity is incremented,
  /// price and display fields keep their original values. Always succeeds;
  /// the advisory per-line maximum is not enforced here. Non-positive
  /// quantities get the same treatment as [`Self::update_cart_quantity`]:
  /// a merge that lands at or below zero removes the line, and an insert
  /// with a non-positive quantity is ignored, so no line ever exists with
  /// a quantity under 1.
  #[instrument(skip(self, product), fields(product_id = %product.id))]
  pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
    let existing_quantity = self
      .cart
      .get()
      .iter()
      .find(|item| item.id() == product.id)
      .map(|item| item.quantity);
    if let Some(existing_quantity) = existing_quantity {
      if existing_quantity + quantity <= 0 {
        self.remove_from_cart(&product.id);
        return;
      }
      self.cart.update(|prev| {
        prev
          .iter()
          .cloned()
          .map(|mut item| {
            if item.id() == product.id {
              item.quantity += quantity;
            }
            item
          })
          .collect()
      });
      self.sink.notify(Notification::new(
        NotificationKind::Info,
        "Updated cart",
        format!("{} quantity updated", product.name),
      ));
    } else {
      if quantity <= 0 {
        debug!(product_id = %product.id, quantity, "non-positive add for id not in cart, ignoring");
        return;
      }
      self.cart.update(|prev| {
        let mut next = prev.clone();
        next.push(CartLineItem::new(product.clone(), quantity));
        next
      });
      self.sink.notify(Notification::new(
        NotificationKind::Success,
        "Added to cart",
        format!("{} added to your cart", product.name),
      ));
    }
  }

  /// Overwrites the quantity of the line with `id`.
  ///
  /// A quantity of zero or less removes the line instead, so the cart never
  /// holds an empty row. The new quantity is not clamped at this layer;
  /// quantity controls are expected to respect
  /// [`CartLineItem::effective_max_quantity`] before calling. Unknown ids
  /// are ignored.
  pub fn update_cart_quantity(&mut self, id: &str, new_quantity: i64) {
    if new_quantity <= 0 {
      self.remove_from_cart(id);
      return;
    }
    if !self.cart.get().iter().any(|item| item.id() == id) {
      debug!(product_id = %id, "quantity update for id not in cart, ignoring");
      return;
    }
    self.cart.update(|prev| {
      prev
        .iter()
        .cloned()
        .map(|mut item| {
          if item.id() == id {
            item.quantity = new_quantity;
          }
          item
        })
        .collect()
    });
  }

  /// Removes the line with `id`, if present. Silent no-op otherwise.
  #[instrument(skip(self))]
  pub fn remove_from_cart(&mut self, id: &str) {
    let removed = self
      .cart
      .get()
      .iter()
      .find(|item| item.id() == id)
      .map(|item| item.product.name.clone());
    let Some(name) = removed else {
      return;
    };
    self.cart.update(|prev| prev.iter().filter(|item| item.id() != id).cloned().collect());
    self.sink.notify(Notification::new(
      NotificationKind::Info,
      "Removed from cart",
      format!("{} removed from your cart", name),
    ));
  }

  /// Empties the cart unconditionally.
  pub fn clear_cart(&mut self) {
    self.cart.set(Vec::new());
    self.sink.notify(Notification::new(
      NotificationKind::Info,
      "Cart cleared",
      "All items removed from your cart",
    ));
  }

  // --- Wishlist ---

  pub fn wishlist_items(&self) -> &[WishlistEntry] {
    self.wishlist.get()
  }

  /// Saves `product` for later. Returns `true` if the entry was inserted.
  ///
  /// Re-adding a product already on the wishlist changes nothing (its
  /// original `date_added` is kept) and fires an "already in wishlist"
  /// warning instead.
  #[instrument(skip(self, product), fields(product_id = %product.id))]
  pub fn add_to_wishlist(&mut self, product: &Product) -> bool {
    if self.wishlist.get().iter().any(|entry| entry.id() == product.id) {
      self.sink.notify(Notification::new(
        NotificationKind::Warning,
        "Already in wishlist",
        format!("{} is already in your wishlist", product.name),
      ));
      return false;
    }
    self.wishlist.update(|prev| {
      let mut next = prev.clone();
      next.push(WishlistEntry::new(product.clone()));
      next
    });
    self.sink.notify(Notification::new(
      NotificationKind::Success,
      "Added to wishlist",
      format!("{} added to your wishlist", product.name),
    ));
    true
  }

  /// Removes the entry with `id`, if present. Silent no-op otherwise.
  #[instrument(skip(self))]
  pub fn remove_from_wishlist(&mut self, id: &str) {
    let removed = self
      .wishlist
      .get()
      .iter()
      .find(|entry| entry.id() == id)
      .map(|entry| entry.product.name.clone());
    let Some(name) = removed else {
      return;
    };
    self
      .wishlist
      .update(|prev| prev.iter().filter(|entry| entry.id() != id).cloned().collect());
    self.sink.notify(Notification::new(
      NotificationKind::Info,
      "Removed from wishlist",
      format!("{} removed from your wishlist", name),
    ));
  }

  /// Moves one wishlist entry into the cart (quantity 1).
  ///
  /// If `id` is not on the wishlist nothing happens at all; otherwise the
  /// cart add and the wishlist removal both complete.
  pub fn move_to_cart(&mut self, id: &str) {
    let product = self
      .wishlist
      .get()
      .iter()
      .find(|entry| entry.id() == id)
      .map(|entry| entry.product.clone());
    let Some(product) = product else {
      debug!(product_id = %id, "move_to_cart for id not in wishlist, ignoring");
      return;
    };
    self.add_to_cart(&product, 1);
    self.remove_from_wishlist(id);
  }

  /// Copies every cart line onto the wishlist, then clears the cart.
  ///
  /// Wishlist insertion happens before the cart is touched, and one
  /// notification fires per item copied (plus the clear confirmation), not
  /// one for the batch. Items already on the wishlist are skipped with
  /// their usual warning; the cart is cleared regardless.
  pub fn move_all_to_wishlist(&mut self) {
    let products: Vec<Product> = self.cart.get().iter().map(|item| item.product.clone()).collect();
    for product in &products {
      self.add_to_wishlist(product);
    }
    self.clear_cart();
  }
}

impl std::fmt::Debug for SessionStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionStore")
      .field("cart", &self.cart)
      .field("wishlist", &self.wishlist)
      .field("pricing", &self.pricing)
      .finish()
  }
}
