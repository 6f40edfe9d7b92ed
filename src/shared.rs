//! Shared Cache Module
//!
//! Thread-safe facade over [`BoundedCache`] for concurrent callers.
//!
//! Concurrency model: every operation runs inside one exclusive critical
//! section, so the value store, ledger and frequency counters always mutate
//! atomically as a unit and partial updates are never observable. Lookups
//! also mutate bookkeeping, so `get` takes the write lock too. Eviction
//! stays synchronous inside `put`; there is no background eviction task.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheStats, EvictionPolicy};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Clonable handle to a cache shared between tasks.
///
/// Values are returned by clone so no lock outlives a call.
#[derive(Debug, Clone)]
pub struct SharedCache<K, V> {
    /// Thread-safe bounded cache
    inner: Arc<RwLock<BoundedCache<K, V>>>,
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    // == Constructors ==
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(BoundedCache::new(capacity, policy)?)),
        })
    }

    /// Creates a shared cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.policy)
    }

    // == Put ==
    /// Stores a key-value pair, evicting first when full.
    pub async fn put(&self, key: K, value: V) {
        self.inner.write().await.put(key, value);
    }

    // == Get ==
    /// Retrieves a clone of the value for a key.
    ///
    /// Takes the write lock, not the read lock: a hit updates the key's
    /// frequency and recency bookkeeping.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.write().await.get(key).cloned()
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    pub async fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().await.remove(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
