// Bounded memoization cache shared by the news fetcher and the TTS renderer.
//
// The pipeline is single-threaded, but the async trait seams require
// `Send + Sync` receivers, so the interior state sits behind a std Mutex.
// The lock is never held across an await point.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

/// Default capacity for the process-wide memo caches.
pub const DEFAULT_CAPACITY: usize = 100;

/// A fixed-capacity key-value memo with insertion-order (FIFO) eviction.
///
/// Values are cloned out on lookup. Only successful results should be
/// inserted — caching a failure would pin it for the process lifetime.
pub struct BoundedCache<K, V> {
    inner: Mutex<CacheState<K, V>>,
    capacity: usize,
}

struct CacheState<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// Look up a key, cloning the value out on a hit.
    pub fn get(&self, key: &K) -> Option<V> {
        let state = self.inner.lock().expect("cache lock poisoned");
        state.entries.get(key).cloned()
    }

    /// Insert a value, evicting the oldest entry when at capacity.
    /// Re-inserting an existing key replaces the value without changing
    /// its eviction position.
    pub fn insert(&self, key: K, value: V) {
        let mut state = self.inner.lock().expect("cache lock poisoned");
        if state.entries.insert(key.clone(), value).is_some() {
            return;
        }
        state.order.push_back(key);
        if state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
            }
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    /// True when no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache: BoundedCache<String, u32> = BoundedCache::new(10);
        assert_eq!(cache.get(&"acme".to_string()), None);
        cache.insert("acme".to_string(), 7);
        assert_eq!(cache.get(&"acme".to_string()), Some(7));
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3);
        assert_eq!(cache.get(&1), None, "Oldest entry should be evicted");
        assert_eq!(cache.get(&2), Some(2));
        assert_eq!(cache.get(&3), Some(3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinsert_replaces_value_without_growing() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(2);
        cache.insert(1, 1);
        cache.insert(1, 99);
        assert_eq!(cache.get(&1), Some(99));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_clamped_to_one() {
        let cache: BoundedCache<u32, u32> = BoundedCache::new(0);
        cache.insert(1, 1);
        assert_eq!(cache.get(&1), Some(1));
        cache.insert(2, 2);
        assert_eq!(cache.get(&1), None);
    }
}
