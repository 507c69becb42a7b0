// basket/src/notify.rs

//! User-facing notifications. Every logical mutation on the session store
//! fires exactly one of these through the injected sink; display is the
//! calling layer's concern (toast, status bar, whatever the shell has).

use std::fmt;

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
  Info,
  Success,
  /// Something the user should notice but that did not change state,
  /// e.g. adding a product that is already on the wishlist.
  Warning,
}

impl fmt::Display for NotificationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NotificationKind::Info => write!(f, "info"),
      NotificationKind::Success => write!(f, "success"),
      NotificationKind::Warning => write!(f, "warning"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub kind: NotificationKind,
  pub title: String,
  pub message: String,
}

impl Notification {
  pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
    Notification {
      kind,
      title: title.into(),
      message: message.into(),
    }
  }
}

/// Where notifications go. Implementations must not block: they run inline
/// on the mutation path.
pub trait NotificationSink: Send + Sync {
  fn notify(&self, notification: Notification);
}

/// Default sink that forwards notifications to `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
  fn notify(&self, notification: Notification) {
    match notification.kind {
      NotificationKind::Warning => warn!(
        kind = %notification.kind,
        title = %notification.title,
        "{}", notification.message
      ),
      _ => info!(
        kind = %notification.kind,
        title = %notification.title,
        "{}", notification.message
      ),
    }
  }
}
