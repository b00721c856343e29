//! Keyed single-flight cache.

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

/// A memoizing cache that runs at most one loader per key at a time.
pub trait KeyedCache<K, T> {
    /// Return the cached value for `key`, calling `load` if there is none.
    ///
    /// Concurrent callers for the same missing key wait for a single `load`
    /// call and all receive its result.
    fn get_or_load<F>(&self, key: K, load: F) -> T
    where
        F: FnOnce() -> T;
}

/// [`KeyedCache`] backed by one [`OnceLock`] slot per key.
///
/// The map lock is only held while fetching a slot, so loads for different
/// keys run in parallel. Entries are never evicted.
pub struct SingleFlightCache<K, T> {
    slots: Mutex<HashMap<K, Arc<OnceLock<T>>>>,
}

impl<K, T> SingleFlightCache<K, T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys that have been requested, including loads in flight.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl<K: Eq + Hash, T: Clone> SingleFlightCache<K, T> {
    /// The loaded value for `key`, without triggering a load.
    pub fn get(&self, key: &K) -> Option<T> {
        let slot = self.slots.lock().get(key).cloned()?;
        slot.get().cloned()
    }
}

impl<K, T> Default for SingleFlightCache<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Debug for SingleFlightCache<K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleFlightCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K: Eq + Hash, T: Clone> KeyedCache<K, T> for SingleFlightCache<K, T> {
    fn get_or_load<F>(&self, key: K, load: F) -> T
    where
        F: FnOnce() -> T,
    {
        let slot = Arc::clone(self.slots.lock().entry(key).or_default());
        slot.get_or_init(load).clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn loads_each_key_once() {
        let cache = SingleFlightCache::new();
        let loads = AtomicUsize::new(0);
        let load = |value: &'static str| {
            loads.fetch_add(1, Ordering::SeqCst);
            value
        };

        assert_eq!(cache.get_or_load(1, || load("one")), "one");
        assert_eq!(cache.get_or_load(1, || load("uno")), "one");
        assert_eq!(cache.get_or_load(2, || load("two")), "two");
        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn get_does_not_load() {
        let cache: SingleFlightCache<u8, u8> = SingleFlightCache::default();
        assert_eq!(cache.get(&7), None);
        assert!(cache.is_empty());
        cache.get_or_load(7, || 49);
        assert_eq!(cache.get(&7), Some(49));
    }

    #[test]
    fn failures_are_memoized() {
        let cache: SingleFlightCache<u8, Result<u8, String>> = SingleFlightCache::new();
        assert_eq!(cache.get_or_load(0, || Err("broken".to_string())), Err("broken".to_string()));
        assert_eq!(cache.get_or_load(0, || Ok(1)), Err("broken".to_string()));
    }
}
