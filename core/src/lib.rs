// src/lib.rs

//! Basket: a dependency-injected state container for storefront sessions.
//!
//! Basket holds the authoritative client-side cart and wishlist for one
//! shopping session and gives you:
//!  - Mutation operations (add/remove/update-quantity/clear/move-between-lists)
//!    with merge-on-repeat-add semantics.
//!  - Derived pricing totals (subtotal, shipping, tax, grand total, item
//!    count), recomputed from the line items on every read.
//!  - Best-effort durable persistence through a pluggable key-value backend,
//!    so state survives a reload without ever blocking a mutation.
//!  - A notification sink fired once per logical operation, for user-facing
//!    confirmations and warnings.
//!  - Session conveniences recovered alongside the cart: recently-viewed
//!    products, search history, and user preferences.
//!
//! Everything is synchronous and single-threaded by design: mutations run
//! inline on the caller's event loop, the in-memory collections are always
//! the latest truth, and storage trails them one write per mutation.

pub mod error;
pub mod history;
pub mod model;
pub mod notify;
pub mod persisted;
pub mod prefs;
pub mod recent;
pub mod storage;
pub mod store;
pub mod totals;

// --- Re-exports for the Public API ---

pub use crate::error::{BasketError, BasketResult};
pub use crate::history::SearchHistory;
pub use crate::model::{CartLineItem, Product, WishlistEntry, DEFAULT_MAX_QUANTITY};
pub use crate::notify::{LogSink, Notification, NotificationKind, NotificationSink};
pub use crate::persisted::Persisted;
pub use crate::prefs::{PreferencesStore, Theme, UserPreferences};
pub use crate::recent::RecentlyViewed;
pub use crate::storage::{MemoryStorage, StateStorage};
pub use crate::store::{SessionStore, StoreConfig};
pub use crate::totals::{CartTotals, PricingRules};
