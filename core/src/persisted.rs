// basket/src/persisted.rs

//! The persistence primitive: a live in-memory value mirrored to a storage
//! key on every write.
//!
//! Storage is a cache, not a source of truth. The value held here is always
//! the latest state; a read failure at construction falls back to the
//! initial value, and a write failure after a mutation is logged and
//! swallowed. A mutation is visible to readers before (and regardless of
//! whether) its storage write succeeds.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{BasketError, BasketResult};
use crate::storage::StateStorage;

/// A value of type `T` kept in memory and mirrored to `storage` under `key`.
pub struct Persisted<T> {
  key: String,
  value: T,
  storage: Arc<dyn StateStorage>,
}

impl<T> Persisted<T>
where
  T: Serialize + DeserializeOwned,
{
  /// Rehydrates the value stored under `key`, or starts from `initial` when
  /// the key is missing or its payload cannot be read or decoded.
  pub fn new(storage: Arc<dyn StateStorage>, key: impl Into<String>, initial: T) -> Self {
    let key = key.into();
    let value = match Self::load(storage.as_ref(), &key) {
      Ok(Some(value)) => {
        debug!(key = %key, "rehydrated persisted value");
        value
      }
      Ok(None) => initial,
      Err(err) => {
        warn!(key = %key, error = %err, "falling back to initial value");
        initial
      }
    };
    Persisted { key, value, storage }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn get(&self) -> &T {
    &self.value
  }

  /// Replaces the value, then mirrors it to storage. The write is
  /// best-effort: a failure is logged, never returned.
  pub fn set(&mut self, value: T) {
    self.value = value;
    if let Err(err) = self.write_through() {
      warn!(key = %self.key, error = %err, "storage write failed, in-memory state retained");
    }
  }

  /// Computes the next value from the current one, then stores it. Using an
  /// updater keeps read-modify-write sequences from acting on a stale copy.
  pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
    let next = f(&self.value);
    self.set(next);
  }

  /// Removes the stored key and resets the live value to `initial`.
  pub fn clear_stored(&mut self, initial: T) {
    self.value = initial;
    if let Err(err) = self.storage.remove(&self.key) {
      warn!(key = %self.key, error = %err, "storage remove failed");
    }
  }

  fn load(storage: &dyn StateStorage, key: &str) -> BasketResult<Option<T>> {
    let raw = storage.get(key).map_err(|source| BasketError::Storage {
      key: key.to_string(),
      source,
    })?;
    match raw {
      Some(raw) => {
        let value = serde_json::from_str(&raw).map_err(|source| BasketError::Codec {
          key: key.to_string(),
          source,
        })?;
        Ok(Some(value))
      }
      None => Ok(None),
    }
  }

  fn write_through(&self) -> BasketResult<()> {
    let raw = serde_json::to_string(&self.value).map_err(|source| BasketError::Codec {
      key: self.key.clone(),
      source,
    })?;
    self.storage.set(&self.key, &raw).map_err(|source| BasketError::Storage {
      key: self.key.clone(),
      source,
    })
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Persisted<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Persisted")
      .field("key", &self.key)
      .field("value", &self.value)
      .finish()
  }
}
