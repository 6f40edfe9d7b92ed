//! Error types for the policy cache
//!
//! Provides unified error handling using thiserror.
//!
//! Normal cache traffic never fails: a lookup of a missing key is a miss,
//! not an error, and lenient input adapters treat absent input as a no-op.
//! Errors only arise from invalid configuration at construction time.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must admit at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Unrecognized eviction policy name
    #[error("Invalid eviction policy: {0:?}")]
    InvalidPolicy(String),
}

// == Result Type Alias ==
/// Convenience Result type for the policy cache.
pub type Result<T> = std::result::Result<T, CacheError>;
