// basket/src/history.rs

//! Persisted search history: most-recent-first, case-insensitively
//! deduplicated, capped. Queries that are too short to be meaningful are
//! dropped on the floor.

use std::sync::Arc;

use crate::persisted::Persisted;
use crate::storage::StateStorage;

const SEARCH_HISTORY_KEY: &str = "search_history";
const SEARCH_HISTORY_CAP: usize = 20;
const MIN_QUERY_LEN: usize = 2;

pub struct SearchHistory {
  queries: Persisted<Vec<String>>,
}

impl SearchHistory {
  pub fn new(storage: Arc<dyn StateStorage>) -> Self {
    SearchHistory {
      queries: Persisted::new(storage, SEARCH_HISTORY_KEY, Vec::new()),
    }
  }

  pub fn queries(&self) -> &[String] {
    self.queries.get()
  }

  /// Records a search. A re-run of an existing query (compared
  /// case-insensitively) moves it to the front rather than duplicating it;
  /// queries shorter than two characters after trimming are ignored.
  /// Accepted queries are stored with their spelling untouched, trimming
  /// happens only for the length check.
  pub fn record(&mut self, query: &str) {
    if query.trim().chars().count() < MIN_QUERY_LEN {
      return;
    }
    let query = query.to_string();
    self.queries.update(|prev| {
      let lowered = query.to_lowercase();
      let mut next = Vec::with_capacity(SEARCH_HISTORY_CAP);
      next.push(query.clone());
      next.extend(prev.iter().filter(|q| q.to_lowercase() != lowered).cloned());
      next.truncate(SEARCH_HISTORY_CAP);
      next
    });
  }

  /// Removes one query by exact match.
  pub fn remove(&mut self, query: &str) {
    self.queries.update(|prev| prev.iter().filter(|q| q.as_str() != query).cloned().collect());
  }

  pub fn clear(&mut self) {
    self.queries.set(Vec::new());
  }
}
