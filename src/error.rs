//! Error types for the streakcache library.
//!
//! ## Key Components
//!
//! - [`EmptyCacheError`]: Returned when eviction is requested from a cache
//!   that holds no elements.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use streakcache::BoundedOrderedCache;
//! use streakcache::error::EmptyCacheError;
//!
//! let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
//!
//! // Evicting from an empty cache fails without panicking
//! assert_eq!(cache.evict_oldest(), Err(EmptyCacheError));
//!
//! cache.insert(1);
//! assert_eq!(cache.evict_oldest(), Ok(1));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyCacheError
// ---------------------------------------------------------------------------

/// Error returned when the oldest element is requested from an empty cache.
///
/// Produced by [`BoundedOrderedCache::evict_oldest`](crate::BoundedOrderedCache::evict_oldest).
/// Fatal to that call only; the cache remains usable and the caller may check
/// [`len`](crate::BoundedOrderedCache::len) before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCacheError;

impl fmt::Display for EmptyCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot evict from an empty cache")
    }
}

impl std::error::Error for EmptyCacheError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug-only `check_invariants` methods on cache types
/// (e.g. [`BoundedOrderedCache::check_invariants`](crate::BoundedOrderedCache::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
