// basket/src/prefs.rs

//! Persisted user preferences. Every field carries a serde default so a
//! payload written by an older build (or edited by hand) still decodes;
//! unknown fields simply reset to their defaults.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::persisted::Persisted;
use crate::storage::StateStorage;

const PREFERENCES_KEY: &str = "user_preferences";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
  Light,
  Dark,
  #[default]
  System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
  pub currency: String,
  pub language: String,
  pub items_per_page: u32,
  pub default_sort: String,
  pub show_out_of_stock: bool,
  pub email_notifications: bool,
  pub push_notifications: bool,
  pub theme: Theme,
}

impl Default for UserPreferences {
  fn default() -> Self {
    UserPreferences {
      currency: "USD".to_string(),
      language: "en".to_string(),
      items_per_page: 20,
      default_sort: "relevance".to_string(),
      show_out_of_stock: true,
      email_notifications: true,
      push_notifications: false,
      theme: Theme::System,
    }
  }
}

pub struct PreferencesStore {
  prefs: Persisted<UserPreferences>,
}

impl PreferencesStore {
  pub fn new(storage: Arc<dyn StateStorage>) -> Self {
    PreferencesStore {
      prefs: Persisted::new(storage, PREFERENCES_KEY, UserPreferences::default()),
    }
  }

  pub fn get(&self) -> &UserPreferences {
    self.prefs.get()
  }

  /// Applies an in-place edit to the preferences and mirrors the result.
  pub fn update(&mut self, f: impl FnOnce(&mut UserPreferences)) {
    self.prefs.update(|prev| {
      let mut next = prev.clone();
      f(&mut next);
      next
    });
  }

  pub fn replace(&mut self, prefs: UserPreferences) {
    self.prefs.set(prefs);
  }

  /// Drops the stored payload and returns to defaults.
  pub fn reset(&mut self) {
    self.prefs.clear_stored(UserPreferences::default());
  }
}
