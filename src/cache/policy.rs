//! Eviction Policy Module
//!
//! Defines the replacement policies available to the bounded cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Eviction Policy ==
/// Replacement policy applied when the cache is full and a new key arrives.
///
/// Chosen at construction and fixed for the cache lifetime. Both policies
/// share the same cache shell and differ only in victim selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvictionPolicy {
    /// Evict the oldest-inserted key. Access recency is ignored.
    Fifo,
    /// Evict the key with the lowest access frequency. Keys tied at the
    /// minimum are resolved by evicting the least recently touched of them.
    LfuLru,
}

impl EvictionPolicy {
    // == Recency Tracking ==
    /// Whether accesses reorder the ledger under this policy.
    ///
    /// FIFO keeps pure arrival order; touches must not reorder it.
    pub(crate) fn tracks_recency(&self) -> bool {
        matches!(self, EvictionPolicy::LfuLru)
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Fifo => write!(f, "fifo"),
            EvictionPolicy::LfuLru => write!(f, "lfu-lru"),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    /// Parses a policy name as used by the `CACHE_POLICY` environment
    /// variable. Accepts `fifo`, `lfu` and `lfu-lru`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lfu" | "lfu-lru" | "lfu_lru" => Ok(EvictionPolicy::LfuLru),
            other => Err(CacheError::InvalidPolicy(other.to_string())),
        }
    }
}
