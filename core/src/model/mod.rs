// basket/src/model/mod.rs

//! Domain records held by the session store.

pub mod cart_item;
pub mod product;
pub mod wishlist_entry;

pub use cart_item::{CartLineItem, DEFAULT_MAX_QUANTITY};
pub use product::Product;
pub use wishlist_entry::WishlistEntry;
