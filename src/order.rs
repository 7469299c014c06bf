//! Ordering predicates for extremum tracking.
//!
//! A [`BoundedOrderedCache`](crate::BoundedOrderedCache) decides which of its
//! elements count as "higher" or "lower" through an injected comparison
//! capability: any `Fn(&T, &T) -> bool` where `order(a, b)` is `true` iff `a`
//! strictly precedes `b`. The predicate must satisfy the strict-weak-order
//! contract (irreflexive, asymmetric, transitive); the cache assumes this and
//! does not verify it.
//!
//! ## Key Components
//!
//! - [`natural_order`]: ascending less-than over `T: Ord` (the default).
//! - [`reverse_order`]: descending greater-than over `T: Ord`.
//!
//! Both are plain `fn` items, so they coerce to the cache's default
//! `fn(&T, &T) -> bool` predicate slot. Custom closures work anywhere a
//! predicate is accepted:
//!
//! ```
//! use streakcache::BoundedOrderedCache;
//!
//! // Order strings by length rather than lexicographically
//! let mut cache: BoundedOrderedCache<&str, 8, _> =
//!     BoundedOrderedCache::with_order(|a: &&str, b: &&str| a.len() < b.len());
//!
//! cache.insert("mid");
//! cache.insert("a");
//! cache.insert("longest");
//!
//! assert_eq!(cache.streak_high(), Some(&"longest"));
//! assert_eq!(cache.streak_low(), Some(&"a"));
//! ```

/// Ascending order: `a` precedes `b` iff `a < b`.
///
/// The default predicate installed by
/// [`BoundedOrderedCache::new`](crate::BoundedOrderedCache::new).
///
/// # Example
///
/// ```
/// use streakcache::order::natural_order;
///
/// assert!(natural_order(&1, &2));
/// assert!(!natural_order(&2, &1));
/// assert!(!natural_order(&1, &1)); // irreflexive
/// ```
#[inline]
pub fn natural_order<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Descending order: `a` precedes `b` iff `a > b`.
///
/// Installing this predicate swaps the meaning of the cache's extrema:
/// `streak_high` tracks the minimum and `streak_low` the maximum.
///
/// # Example
///
/// ```
/// use streakcache::BoundedOrderedCache;
/// use streakcache::order::reverse_order;
///
/// let mut cache: BoundedOrderedCache<i32, 4, _> =
///     BoundedOrderedCache::with_order(reverse_order);
/// cache.insert(5);
/// cache.insert(2);
/// cache.insert(9);
///
/// assert_eq!(cache.streak_high(), Some(&2));
/// assert_eq!(cache.streak_low(), Some(&9));
/// ```
#[inline]
pub fn reverse_order<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}
