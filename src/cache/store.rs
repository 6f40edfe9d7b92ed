//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an order ledger and
//! per-entry frequency counters, dispatched through a pluggable
//! victim-selection policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::cache::{Cache, CacheEntry, CacheStats, EvictionPolicy, OrderLedger};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// Fixed-capacity key-value cache with pluggable eviction.
///
/// Holds at most `capacity` entries. When a `put` would admit a genuinely
/// new key past capacity, a victim is chosen by the active
/// [`EvictionPolicy`] and removed first. Overwriting an existing key never
/// changes the entry count and never evicts.
///
/// Every eviction is reported exactly once: a `tracing` debug event naming
/// the victim key, plus the eviction counter in [`CacheStats`].
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage; each entry carries its own frequency counter
    entries: HashMap<K, CacheEntry<V>>,
    /// Arrival/recency ordering of the stored keys
    ledger: OrderLedger<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: NonZeroUsize,
    /// Victim-selection policy
    policy: EvictionPolicy,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero. A
    /// cache that could never retain an entry is a configuration mistake,
    /// so it is rejected here rather than admitted as a degenerate case.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(capacity))?;
        Ok(Self {
            entries: HashMap::with_capacity(capacity.get()),
            ledger: OrderLedger::new(),
            stats: CacheStats::new(),
            capacity,
            policy,
        })
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.policy)
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists its value is overwritten, the touch counts
    /// toward its frequency and (under LFU+LRU) its recency, and no
    /// eviction can occur. A new key inserted into a full cache first
    /// evicts the policy's victim, then lands with frequency 1 as the most
    /// recently used entry.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.touch();
            if self.policy.tracks_recency() {
                self.ledger.touch(&key);
            }
            trace!("Overwrote key {:?}", key);
            self.check_sync();
            return;
        }

        // Compare the count before insertion: only a genuinely new key can
        // push the cache past its limit.
        if self.entries.len() >= self.capacity.get() {
            self.evict_one();
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.ledger.record(key);
        self.stats.set_total_entries(self.entries.len());
        self.check_sync();
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit counts as a touch: the frequency counter grows and, under
    /// LFU+LRU, the key becomes most recently used. The stored value is
    /// never altered by lookups, so repeated gets return the same value.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.entries.contains_key(key) {
            self.stats.record_miss();
            return None;
        }

        if self.policy.tracks_recency() {
            self.ledger.touch(key);
        }
        self.stats.record_hit();

        let entry = self.entries.get_mut(key)?;
        entry.touch();
        Some(&entry.value)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// Explicit removal is not an eviction: no notification fires and the
    /// eviction counter is untouched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.ledger.remove(key);
        self.stats.set_total_entries(self.entries.len());
        self.check_sync();
        Some(entry.value)
    }

    // == Clear ==
    /// Drops every entry and its bookkeeping. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.ledger.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains ==
    /// Checks for a key without touching it: no frequency or recency
    /// update, no hit/miss accounting.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Frequency ==
    /// Returns the frequency counter for a key, if cached. Read-only.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.frequency)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    /// Maximum number of entries this cache can hold.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// The eviction policy chosen at construction.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Victim Selection ==
    /// Picks the entry the active policy sacrifices next.
    ///
    /// FIFO: the oldest-inserted key, straight off the ledger front.
    /// LFU+LRU: the lowest frequency wins; among tied keys the ledger
    /// scan (oldest first) makes the least recently touched one the
    /// victim deterministically.
    fn select_victim(&self) -> Option<&K> {
        match self.policy {
            EvictionPolicy::Fifo => self.ledger.peek_oldest(),
            EvictionPolicy::LfuLru => {
                let min_freq = self.entries.values().map(|e| e.frequency).min()?;
                self.ledger.iter().find(|&key| {
                    self.entries
                        .get(key)
                        .map_or(false, |e| e.frequency == min_freq)
                })
            }
        }
    }

    // == Eviction ==
    /// Evicts one entry chosen by the active policy and reports it.
    fn evict_one(&mut self) {
        let Some(victim) = self.select_victim().cloned() else {
            return;
        };
        self.entries.remove(&victim);
        self.ledger.remove(&victim);
        self.stats.record_eviction();
        debug!("Evicted key {:?} ({} policy)", victim, self.policy);
    }

    // == Invariant Check ==
    /// The ledger and the value store must always hold the same key set,
    /// and the entry count must never exceed capacity. A mismatch is a
    /// programming error, not a runtime condition.
    fn check_sync(&self) {
        debug_assert_eq!(
            self.entries.len(),
            self.ledger.len(),
            "ledger out of sync with value store"
        );
        debug_assert!(
            self.entries.len() <= self.capacity.get(),
            "entry count exceeds capacity"
        );
    }
}

// == Cache Contract ==
impl<K, V> Cache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn put(&mut self, key: K, value: V) {
        BoundedCache::put(self, key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        BoundedCache::get(self, key)
    }

    fn len(&self) -> usize {
        BoundedCache::len(self)
    }
}
