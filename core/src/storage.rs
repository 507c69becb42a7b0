// basket/src/storage.rs

//! The durable key-value backend the session state is mirrored into.
//!
//! The contract matches what the store was written against in the browser:
//! string keys, string-serialized values, get/set/remove. Backends are
//! injected, so a desktop shell can hand in a file-backed implementation
//! while tests use [`MemoryStorage`].

use std::collections::HashMap;

use parking_lot::RwLock;

/// A string-keyed durable store.
///
/// Implementations report failures (quota exceeded, I/O errors) through
/// `anyhow::Result`; callers in this crate treat every failure as
/// recoverable and keep the in-memory state authoritative.
pub trait StateStorage: Send + Sync {
  fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
  fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
  fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// In-process backend over a `parking_lot::RwLock`-guarded map.
///
/// Used by tests and for sessions that do not need to survive a restart.
/// Lock guards are never held across calls out of this module.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of keys currently stored.
  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

impl StateStorage for MemoryStorage {
  fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> anyhow::Result<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}
