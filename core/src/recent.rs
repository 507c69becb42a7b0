// basket/src/recent.rs

//! Recently-viewed product tracking: a persisted, most-recent-first list of
//! product ids, deduplicated and capped.

use std::sync::Arc;

use crate::persisted::Persisted;
use crate::storage::StateStorage;

const RECENTLY_VIEWED_KEY: &str = "recently_viewed";
const RECENTLY_VIEWED_CAP: usize = 10;

pub struct RecentlyViewed {
  ids: Persisted<Vec<String>>,
}

impl RecentlyViewed {
  pub fn new(storage: Arc<dyn StateStorage>) -> Self {
    RecentlyViewed {
      ids: Persisted::new(storage, RECENTLY_VIEWED_KEY, Vec::new()),
    }
  }

  pub fn ids(&self) -> &[String] {
    self.ids.get()
  }

  /// Records a product view. The id moves (or is inserted) to the front;
  /// anything beyond the cap falls off the end.
  pub fn record(&mut self, product_id: &str) {
    self.ids.update(|prev| {
      let mut next = Vec::with_capacity(RECENTLY_VIEWED_CAP);
      next.push(product_id.to_string());
      next.extend(prev.iter().filter(|id| id.as_str() != product_id).cloned());
      next.truncate(RECENTLY_VIEWED_CAP);
      next
    });
  }

  pub fn clear(&mut self) {
    self.ids.set(Vec::new());
  }
}
