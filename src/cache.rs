use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use serde_json::Value;

/// Decoded upstream responses keyed by the exact request URL.
///
/// Cloning shares the underlying map, so one cache constructed per session
/// can be handed to every fetcher of that session. Entries live as long as
/// the last clone; nothing is evicted or expired.
#[derive(Default, Clone)]
pub struct ResponseCache {
    inner: Arc<RwLock<HashMap<String, Arc<Value>>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Arc<Value>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(url).cloned()
    }

    /// Stores `value` under `url`, replacing any earlier entry.
    pub fn insert(&self, url: impl Into<String>, value: Value) -> Arc<Value> {
        let value = Arc::new(value);
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(url.into(), value.clone());
        value
    }

    pub fn contains(&self, url: &str) -> bool {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.contains_key(url)
    }

    pub fn len(&self) -> usize {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.clear();
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn clones_share_entries() {
        let cache = ResponseCache::new();
        let other = cache.clone();

        cache.insert("https://pokeapi.co/api/v2/pokemon/1", json!({ "id": 1 }));

        assert!(other.contains("https://pokeapi.co/api/v2/pokemon/1"));
        assert_eq!(
            *other.get("https://pokeapi.co/api/v2/pokemon/1").unwrap(),
            json!({ "id": 1 })
        );
    }

    #[test]
    fn one_entry_per_url() {
        let cache = ResponseCache::new();
        cache.insert("a", json!(1));
        cache.insert("a", json!(2));
        cache.insert("b", json!(3));

        assert_eq!(cache.len(), 2);
        assert_eq!(*cache.get("a").unwrap(), json!(2));

        cache.clear();
        assert!(cache.is_empty());
    }
}
