// tests/persistence_tests.rs
mod common;

use std::sync::Arc;

use common::*;

use basket::{MemoryStorage, Persisted, SessionStore, StateStorage};

#[test]
fn session_state_survives_a_reload() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  let sink = RecordingSink::new();

  {
    let mut store = SessionStore::new(storage.clone(), sink.clone());
    store.add_to_cart(&product("1", "Widget", 10_00), 2);
    store.add_to_cart(&product("2", "Gizmo", 5_00), 1);
    store.add_to_wishlist(&product("3", "Doohickey", 7_50));
  } // store dropped, simulating the page going away

  let reloaded = SessionStore::new(storage, RecordingSink::new());
  assert_eq!(reloaded.cart_items().len(), 2);
  assert_eq!(reloaded.cart_items()[0].id(), "1");
  assert_eq!(reloaded.cart_items()[0].quantity, 2);
  assert_eq!(reloaded.cart_items()[1].product.price_cents, 5_00);
  assert_eq!(reloaded.wishlist_items().len(), 1);
  assert_eq!(reloaded.wishlist_items()[0].id(), "3");
  assert_eq!(reloaded.cart_total().item_count, 3);
}

#[test]
fn reloaded_collections_compare_equal_by_value() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  let mut store = SessionStore::new(storage.clone(), RecordingSink::new());
  store.add_to_cart(&product("1", "Widget", 10_00), 4);
  store.add_to_wishlist(&product("2", "Gizmo", 5_00));

  let cart_before = store.cart_items().to_vec();
  let wishlist_before = store.wishlist_items().to_vec();
  drop(store);

  let reloaded = SessionStore::new(storage, RecordingSink::new());
  assert_eq!(reloaded.cart_items(), cart_before.as_slice());
  assert_eq!(reloaded.wishlist_items(), wishlist_before.as_slice());
}

#[test]
fn corrupt_payload_falls_back_to_the_initial_value() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  storage.set("cart_items", "not json at all").unwrap();
  storage.set("wishlist_items", "{\"wrong\": \"shape\"}").unwrap();

  let store = SessionStore::new(storage, RecordingSink::new());
  assert!(store.cart_items().is_empty());
  assert!(store.wishlist_items().is_empty());
}

#[test]
fn storage_failures_never_block_mutations() {
  setup_tracing();
  let sink = RecordingSink::new();
  let mut store = SessionStore::new(Arc::new(FailingStorage), sink.clone());

  store.add_to_cart(&product("1", "Widget", 10_00), 2);
  store.add_to_wishlist(&product("2", "Gizmo", 5_00));
  store.update_cart_quantity("1", 5);

  // In-memory state is the source of truth; the broken mirror is invisible.
  assert_eq!(store.cart_items()[0].quantity, 5);
  assert_eq!(store.wishlist_items().len(), 1);
  assert_eq!(sink.titles(), vec!["Added to cart", "Added to wishlist"]);
}

#[test]
fn persisted_setter_supports_values_and_updaters() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  let mut counter: Persisted<i64> = Persisted::new(storage.clone(), "counter", 0);

  counter.set(10);
  counter.update(|prev| prev + 5);
  assert_eq!(*counter.get(), 15);

  // The mirror holds the serialized latest value.
  assert_eq!(storage.get("counter").unwrap().as_deref(), Some("15"));
}

#[test]
fn persisted_rehydrates_from_an_existing_key() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  storage.set("counter", "42").unwrap();

  let counter: Persisted<i64> = Persisted::new(storage, "counter", 0);
  assert_eq!(*counter.get(), 42);
}

#[test]
fn persisted_clear_stored_removes_the_key_and_resets() {
  setup_tracing();
  let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
  let mut counter: Persisted<i64> = Persisted::new(storage.clone(), "counter", 0);
  counter.set(7);
  assert_eq!(storage.len(), 1);

  counter.clear_stored(0);
  assert_eq!(*counter.get(), 0);
  assert!(storage.is_empty());
}

#[test]
fn every_mutation_writes_through_once() {
  setup_tracing();

  /// Counts writes per key so the one-write-per-mutation contract is visible.
  #[derive(Debug, Default)]
  struct CountingStorage {
    inner: MemoryStorage,
    writes: parking_lot::Mutex<usize>,
  }

  impl StateStorage for CountingStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
      self.inner.get(key)
    }
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
      *self.writes.lock() += 1;
      self.inner.set(key, value)
    }
    fn remove(&self, key: &str) -> anyhow::Result<()> {
      self.inner.remove(key)
    }
  }

  let storage = Arc::new(CountingStorage::default());
  let mut store = SessionStore::new(storage.clone(), RecordingSink::new());

  store.add_to_cart(&product("1", "Widget", 10_00), 1);
  store.update_cart_quantity("1", 3);
  store.remove_from_cart("1");

  assert_eq!(*storage.writes.lock(), 3);
}
