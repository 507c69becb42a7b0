// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use anyhow::anyhow;
use parking_lot::Mutex;
use tracing::Level;

use basket::{Notification, NotificationSink, Product, StateStorage};

// --- Common Fixtures ---

pub fn product(id: &str, name: &str, price_cents: i64) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    image: format!("/images/{id}.jpg"),
    category: "gadgets".to_string(),
    price_cents,
    original_price_cents: None,
  }
}

// --- Recording Notification Sink ---

/// Captures every notification so tests can assert on count, kind and copy.
#[derive(Debug, Default)]
pub struct RecordingSink {
  notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn notifications(&self) -> Vec<Notification> {
    self.notifications.lock().clone()
  }

  pub fn titles(&self) -> Vec<String> {
    self.notifications.lock().iter().map(|n| n.title.clone()).collect()
  }

  pub fn len(&self) -> usize {
    self.notifications.lock().len()
  }

  pub fn clear(&self) {
    self.notifications.lock().clear();
  }
}

impl NotificationSink for RecordingSink {
  fn notify(&self, notification: Notification) {
    self.notifications.lock().push(notification);
  }
}

// --- Failing Storage Backend ---

/// A backend where every operation fails, simulating quota exhaustion.
/// The store must keep working purely in memory.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl StateStorage for FailingStorage {
  fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    Err(anyhow!("storage read refused for '{key}'"))
  }

  fn set(&self, key: &str, _value: &str) -> anyhow::Result<()> {
    Err(anyhow!("quota exceeded writing '{key}'"))
  }

  fn remove(&self, key: &str) -> anyhow::Result<()> {
    Err(anyhow!("storage remove refused for '{key}'"))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
