//! Cache Module
//!
//! Provides bounded in-memory caching with pluggable eviction policies.

mod entry;
mod ledger;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use ledger::OrderLedger;
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
pub use store::BoundedCache;

// == Cache Contract ==
/// The abstract contract every cache variant exposes.
///
/// `None` is the absent sentinel throughout: `get` of a missing key returns
/// `None`, and the `_opt` adapters turn absent input into a silent no-op.
/// Callers written against this trait can swap eviction policies (or whole
/// cache variants) without changing semantics.
pub trait Cache<K, V> {
    /// Stores a key-value pair, evicting first if the variant is bounded
    /// and full.
    fn put(&mut self, key: K, value: V);

    /// Retrieves a value, touching the key's bookkeeping on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Current number of cached entries.
    fn len(&self) -> usize;

    /// True when nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lenient `put`: an absent key or value is a silent no-op.
    fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.put(key, value);
        }
    }

    /// Lenient `get`: an absent key returns the absent sentinel without
    /// touching any state, not even the miss counter.
    fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        self.get(key?)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(capacity: usize) -> BoundedCache<&'static str, &'static str> {
        BoundedCache::new(capacity, EvictionPolicy::Fifo).unwrap()
    }

    #[test]
    fn test_put_opt_absent_key_is_noop() {
        let mut cache = bounded(10);

        cache.put_opt(None, Some("value"));

        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_put_opt_absent_value_is_noop() {
        let mut cache = bounded(10);

        cache.put_opt(Some("key"), None);

        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_opt_present_inserts() {
        let mut cache = bounded(10);

        cache.put_opt(Some("key"), Some("value"));

        assert_eq!(cache.get(&"key"), Some(&"value"));
    }

    #[test]
    fn test_get_opt_absent_key_has_no_side_effects() {
        let mut cache = bounded(10);

        assert_eq!(cache.get_opt(None), None);

        // Not even a miss is recorded for the absent sentinel
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_get_opt_present_key() {
        let mut cache = bounded(10);

        cache.put("key", "value");
        assert_eq!(cache.get_opt(Some(&"key")), Some(&"value"));
    }

    #[test]
    fn test_policies_are_interchangeable_behind_the_trait() {
        fn fill(cache: &mut dyn Cache<u32, u32>) {
            for i in 0..5 {
                cache.put(i, i * 10);
            }
        }

        let mut fifo: BoundedCache<u32, u32> =
            BoundedCache::new(3, EvictionPolicy::Fifo).unwrap();
        let mut lfu: BoundedCache<u32, u32> =
            BoundedCache::new(3, EvictionPolicy::LfuLru).unwrap();

        fill(&mut fifo);
        fill(&mut lfu);

        assert_eq!(fifo.len(), 3);
        assert_eq!(lfu.len(), 3);
    }
}
