// basket/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors raised by the persistence layer.
///
/// These never cross the public mutation API: the in-memory collections are
/// the source of truth and storage is a best-effort mirror, so a failed read
/// or write is logged and recovered locally. The type exists so the
/// persistence plumbing has something structured to log and so storage
/// backends can be probed directly in tests.
#[derive(Debug, Error)]
pub enum BasketError {
  #[error("Storage operation failed for key '{key}'. Source: {source}")]
  Storage {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Could not encode or decode value for key '{key}'. Source: {source}")]
  Codec {
    key: String,
    #[source]
    source: serde_json::Error,
  },
}

pub type BasketResult<T, E = BasketError> = std::result::Result<T, E>;
