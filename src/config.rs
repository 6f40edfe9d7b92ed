//! Configuration Module
//!
//! Handles loading cache parameters from environment variables.

use std::env;

use crate::cache::EvictionPolicy;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy applied when the cache is full
    pub policy: EvictionPolicy,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_POLICY` - Eviction policy, `fifo` or `lfu-lru` (default: fifo)
    ///
    /// Malformed values fall back to the defaults rather than failing here;
    /// capacity validation happens when the cache is constructed.
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            policy: env::var("CACHE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(EvictionPolicy::Fifo),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            policy: EvictionPolicy::Fifo,
        }
    }
}
