//! Policy Cache - A bounded in-memory key-value cache
//!
//! Provides fixed-capacity caching with pluggable eviction policies:
//! first-in-first-out, or least-frequently-used with a least-recently-used
//! tie-break. Eviction happens synchronously inside `put` when a new key
//! would exceed capacity, and every evicted key is reported exactly once.

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;

pub use cache::{BoundedCache, Cache, CacheStats, EvictionPolicy};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
