//! Fixed-capacity insertion-ordered cache with streak extrema tracking.
//!
//! Stores up to `N` elements in a ring buffer, newest first. Once the
//! capacity bound is reached, admitting a new element evicts the oldest one.
//! Alongside the residents, the cache keeps two cloned scalars — the streak
//! high and streak low — updated incrementally on every insert according to a
//! pluggable ordering predicate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                   BoundedOrderedCache<T, N=4> Layout                        │
//! │                                                                             │
//! │   Ring Buffer                                                               │
//! │   ────────────                                                              │
//! │                                                                             │
//! │   data: [Option<T>; N]        cursor: next write position                   │
//! │   len: resident count         (wraps around when full)                      │
//! │                                                                             │
//! │   After inserting: 5, 2, 9, 4, 7                                            │
//! │                                                                             │
//! │   Index:      0      1      2      3                                        │
//! │            ┌──────┬──────┬──────┬──────┐                                    │
//! │   data:    │  7   │  2   │  9   │  4   │                                    │
//! │            └──────┴──────┴──────┴──────┘                                    │
//! │               ▲                                                             │
//! │               │                                                             │
//! │            cursor = 1 (next write goes here; slot 1 holds the OLDEST)       │
//! │                                                                             │
//! │   Logical order (newest → oldest):  7, 4, 9, 2     (5 was evicted)          │
//! │                                                                             │
//! │   kth_newest(k) = data[(cursor + N - k) % N]                                │
//! │   oldest slot   = data[(cursor + N - len) % N]                              │
//! │                                                                             │
//! │   Streak Extrema                                                            │
//! │   ──────────────                                                            │
//! │                                                                             │
//! │   high: Some(9)   low: Some(2)                                              │
//! │                                                                             │
//! │   Updated once per insert using only the predicate and the new value.       │
//! │   NOT recomputed on eviction: after 2 is evicted, low still reports 2.      │
//! │   The accessors are named streak_high/streak_low for exactly this reason:   │
//! │   they track the best value seen since the cache last became non-empty,     │
//! │   not the extrema of the currently resident set.                            │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`BoundedOrderedCache`]: the container
//! - [`Iter`]: borrowed iterator over residents in newest-first order, with
//!   dereferenced-value cursor equality
//!
//! ## Operations
//!
//! | Operation                 | Description                           | Complexity |
//! |---------------------------|---------------------------------------|------------|
//! | [`insert`]                | Admit element (evicts oldest if full) | O(1)       |
//! | [`emplace`] / [`try_emplace`] | Construct element, then insert    | O(1)       |
//! | [`evict_oldest`]          | Remove and return the oldest element  | O(1)       |
//! | [`streak_high`] / [`streak_low`] | Cached streak extrema          | O(1)       |
//! | [`peek_newest`] / [`peek_oldest`] | Borrow the ends               | O(1)       |
//! | [`iter`]                  | Newest-first traversal                | O(len)     |
//! | [`clear`]                 | Reset to empty                        | O(N)       |
//!
//! [`insert`]: BoundedOrderedCache::insert
//! [`emplace`]: BoundedOrderedCache::emplace
//! [`try_emplace`]: BoundedOrderedCache::try_emplace
//! [`evict_oldest`]: BoundedOrderedCache::evict_oldest
//! [`streak_high`]: BoundedOrderedCache::streak_high
//! [`streak_low`]: BoundedOrderedCache::streak_low
//! [`peek_newest`]: BoundedOrderedCache::peek_newest
//! [`peek_oldest`]: BoundedOrderedCache::peek_oldest
//! [`iter`]: BoundedOrderedCache::iter
//! [`clear`]: BoundedOrderedCache::clear
//!
//! ## Example Usage
//!
//! ```
//! use streakcache::BoundedOrderedCache;
//!
//! let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
//!
//! cache.insert(5);
//! cache.insert(2);
//! cache.insert(9);
//!
//! assert_eq!(cache.to_vec_newest_first(), vec![9, 2, 5]);
//! assert_eq!(cache.streak_high(), Some(&9));
//! assert_eq!(cache.streak_low(), Some(&2));
//!
//! // Capacity reached: inserting evicts the oldest (5)
//! cache.insert(4);
//! assert_eq!(cache.to_vec_newest_first(), vec![4, 9, 2]);
//! assert_eq!(cache.len(), 3);
//! ```
//!
//! ## Thread Safety
//!
//! `BoundedOrderedCache` is not thread-safe. All mutation happens across
//! multiple non-atomic steps; callers needing shared access must serialize
//! it externally (e.g. `Mutex<BoundedOrderedCache<..>>`).
//!
//! ## Implementation Notes
//!
//! - Const generic `N` fixes the capacity at the type level; no resizing.
//! - Eviction is position-based (`Option::take` on the oldest slot), never a
//!   scan for an equal value, so duplicates elsewhere are untouched.
//! - The extrema are clones, not references into the buffer; eviction can
//!   never leave them dangling.
//! - Zero-capacity caches (`N = 0`) are permanently empty; `insert` is a
//!   no-op and `evict_oldest` always fails.
//! - `debug_validate_invariants()` available in debug/test builds.

use std::fmt;

use crate::display::{space_separated, SpaceSeparated};
use crate::error::{EmptyCacheError, InvariantError};
use crate::order::natural_order;

/// Fixed-capacity insertion-ordered cache with incremental extrema tracking.
///
/// Holds up to `N` elements of type `T` in insertion order, newest first.
/// Admitting an element into a full cache evicts the oldest resident first.
/// Two cloned scalars, the streak high and streak low, are maintained
/// incrementally under the ordering predicate `F`.
///
/// # Type Parameters
///
/// - `T`: element type (`Clone` required by the inserting operations)
/// - `N`: capacity bound, fixed at the type level (const generic)
/// - `F`: ordering predicate, `order(a, b)` true iff `a` strictly precedes
///   `b`; defaults to a plain fn pointer so [`new`](Self::new) can install
///   less-than over `T: Ord`
///
/// # Streak extrema semantics
///
/// `streak_high`/`streak_low` report the best value seen since the cache
/// last transitioned from empty to non-empty. They are never recomputed on
/// eviction, so once the element that set an extremum has been evicted the
/// accessor keeps reporting the evicted value. This staleness is the
/// documented contract, chosen over an auxiliary ordered index; see the
/// module docs.
///
/// # Example
///
/// ```
/// use streakcache::BoundedOrderedCache;
///
/// let mut cache: BoundedOrderedCache<u32, 2> = BoundedOrderedCache::new();
/// cache.insert(10);
/// cache.insert(30);
/// cache.insert(20); // evicts 10
///
/// assert_eq!(cache.to_vec_newest_first(), vec![20, 30]);
/// assert_eq!(cache.streak_high(), Some(&30));
/// assert_eq!(cache.streak_low(), Some(&10)); // stale: 10 was evicted
/// ```
pub struct BoundedOrderedCache<T, const N: usize, F = fn(&T, &T) -> bool> {
    data: [Option<T>; N],
    len: usize,
    /// Next write position; the slot it points at holds the oldest resident
    /// whenever the cache is full.
    cursor: usize,
    order: F,
    high: Option<T>,
    low: Option<T>,
}

impl<T: Ord, const N: usize> BoundedOrderedCache<T, N> {
    /// Creates an empty cache with the default less-than ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let cache: BoundedOrderedCache<i32, 8> = BoundedOrderedCache::new();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self::with_order(natural_order::<T>)
    }
}

impl<T: Ord, const N: usize> Default for BoundedOrderedCache<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, F> BoundedOrderedCache<T, N, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty cache with a caller-supplied ordering predicate.
    ///
    /// `order(a, b)` must be `true` iff `a` strictly precedes `b` and must
    /// satisfy the strict-weak-order contract; the cache assumes this and
    /// does not verify it.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// // Compare by absolute value
    /// let mut cache: BoundedOrderedCache<i32, 4, _> =
    ///     BoundedOrderedCache::with_order(|a: &i32, b: &i32| a.abs() < b.abs());
    ///
    /// cache.insert(-7);
    /// cache.insert(3);
    /// assert_eq!(cache.streak_high(), Some(&-7));
    /// assert_eq!(cache.streak_low(), Some(&3));
    /// ```
    pub fn with_order(order: F) -> Self {
        Self {
            data: std::array::from_fn(|_| None),
            len: 0,
            cursor: 0,
            order,
            high: None,
            low: None,
        }
    }

    /// Returns the capacity bound `N`.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let cache: BoundedOrderedCache<i32, 5> = BoundedOrderedCache::new();
    /// assert_eq!(cache.capacity(), 5);
    /// ```
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of resident elements (<= `N`).
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 2> = BoundedOrderedCache::new();
    /// assert_eq!(cache.len(), 0);
    ///
    /// cache.insert(1);
    /// cache.insert(2);
    /// cache.insert(3); // evicts 1, len stays at capacity
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are resident.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// assert!(cache.is_empty());
    ///
    /// cache.insert(1);
    /// assert!(!cache.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Admits an element, evicting the oldest resident first if the cache is
    /// at capacity. Eviction strictly precedes admission, so the bound is
    /// never exceeded.
    ///
    /// The streak extrema are updated in the same pass: the first element of
    /// a streak sets both, a later element replaces the high if the predicate
    /// orders the current high before it, else replaces the low if the
    /// predicate orders it before the current low. A value tied with both
    /// extremes updates neither.
    ///
    /// On a zero-capacity cache this is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
    /// cache.insert(5);
    /// assert_eq!(cache.streak_high(), Some(&5));
    /// assert_eq!(cache.streak_low(), Some(&5));
    ///
    /// cache.insert(2);
    /// assert_eq!(cache.streak_high(), Some(&5));
    /// assert_eq!(cache.streak_low(), Some(&2));
    ///
    /// cache.insert(9);
    /// assert_eq!(cache.streak_high(), Some(&9));
    /// assert_eq!(cache.streak_low(), Some(&2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Clone,
    {
        if N == 0 {
            return;
        }
        if self.len == N {
            // Guarded by len == N > 0, so this cannot fail.
            let _ = self.evict_oldest();
        }

        let slot = self.cursor;
        self.cursor = (self.cursor + 1) % N;
        self.len += 1;

        if self.len == 1 {
            // Streak start: empty → occupied resets both extrema.
            self.high = Some(value.clone());
            self.low = Some(value.clone());
        } else if let (Some(high), Some(low)) = (&mut self.high, &mut self.low) {
            if (self.order)(high, &value) {
                *high = value.clone();
            } else if (self.order)(&value, low) {
                *low = value.clone();
            }
        }

        self.data[slot] = Some(value);
    }

    /// Constructs an element from `args` via `From`, then inserts it.
    ///
    /// Construction and admission are two explicit steps; the element is
    /// fully built before [`insert`](Self::insert) runs. For fallible
    /// construction use [`try_emplace`](Self::try_emplace).
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<String, 4> = BoundedOrderedCache::new();
    /// cache.emplace("hello");
    ///
    /// assert_eq!(cache.peek_newest().map(String::as_str), Some("hello"));
    /// ```
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A> + Clone,
    {
        self.insert(T::from(args));
    }

    /// Constructs an element from `args` via `TryFrom`, then inserts it.
    ///
    /// A construction failure is propagated unchanged and nothing is
    /// admitted; the cache state (residents and extrema) is untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<u8, 4> = BoundedOrderedCache::new();
    ///
    /// assert!(cache.try_emplace(200i32).is_ok());
    /// assert!(cache.try_emplace(-1i32).is_err()); // u8::try_from fails
    /// assert_eq!(cache.len(), 1);                 // no partial insert
    /// ```
    pub fn try_emplace<A>(&mut self, args: A) -> Result<(), <T as TryFrom<A>>::Error>
    where
        T: TryFrom<A> + Clone,
    {
        let value = T::try_from(args)?;
        self.insert(value);
        Ok(())
    }

    /// Removes and returns the oldest resident element.
    ///
    /// Removal targets the oldest slot by position, never by value equality,
    /// so residents elsewhere that happen to compare equal to the oldest one
    /// are untouched. The streak extrema are deliberately not recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCacheError`] if the cache holds no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    /// use streakcache::error::EmptyCacheError;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(1);
    /// cache.insert(2);
    ///
    /// assert_eq!(cache.evict_oldest(), Ok(1));
    /// assert_eq!(cache.evict_oldest(), Ok(2));
    /// assert_eq!(cache.evict_oldest(), Err(EmptyCacheError));
    /// ```
    pub fn evict_oldest(&mut self) -> Result<T, EmptyCacheError> {
        if self.len == 0 {
            return Err(EmptyCacheError);
        }
        let idx = (self.cursor + N - self.len) % N;
        let evicted = self.data[idx].take().expect("occupied slot missing");
        self.len -= 1;
        Ok(evicted)
    }

    /// Returns the k-th newest resident (`k = 1` is the newest).
    ///
    /// Returns `None` if `k` is 0 or exceeds the resident count.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(10);
    /// cache.insert(20);
    /// cache.insert(30);
    ///
    /// assert_eq!(cache.kth_newest(1), Some(&30));
    /// assert_eq!(cache.kth_newest(3), Some(&10));
    /// assert_eq!(cache.kth_newest(0), None);
    /// assert_eq!(cache.kth_newest(4), None);
    /// ```
    pub fn kth_newest(&self, k: usize) -> Option<&T> {
        if N == 0 || k == 0 || k > self.len {
            return None;
        }
        let idx = (self.cursor + N - k) % N;
        self.data[idx].as_ref()
    }

    /// Borrows the newest resident, or `None` if the cache is empty.
    pub fn peek_newest(&self) -> Option<&T> {
        self.kth_newest(1)
    }

    /// Borrows the oldest resident (the next eviction victim), or `None` if
    /// the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(1);
    /// cache.insert(2);
    ///
    /// assert_eq!(cache.peek_oldest(), Some(&1));
    /// assert_eq!(cache.len(), 2); // not removed
    /// ```
    pub fn peek_oldest(&self) -> Option<&T> {
        self.kth_newest(self.len)
    }

    /// Returns the streak high: the highest value, per the ordering
    /// predicate, seen since the cache last transitioned from empty to
    /// non-empty.
    ///
    /// `None` only if the cache has never been non-empty. May be stale after
    /// evictions — see the [type docs](Self#streak-extrema-semantics).
    pub fn streak_high(&self) -> Option<&T> {
        self.high.as_ref()
    }

    /// Returns the streak low: the lowest value, per the ordering predicate,
    /// seen since the cache last transitioned from empty to non-empty.
    ///
    /// `None` only if the cache has never been non-empty. May be stale after
    /// evictions — see the [type docs](Self#streak-extrema-semantics).
    pub fn streak_low(&self) -> Option<&T> {
        self.low.as_ref()
    }

    /// Drops all residents and resets the cursor and both extrema.
    ///
    /// Unlike eviction, this is an explicit whole-container reset, so the
    /// streak extrema are cleared too and the next insert starts a fresh
    /// streak.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(1);
    /// cache.insert(2);
    ///
    /// cache.clear();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.streak_high(), None);
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.data {
            *slot = None;
        }
        self.len = 0;
        self.cursor = 0;
        self.high = None;
        self.low = None;
    }

    /// Returns an iterator over residents in newest-first order.
    ///
    /// Each call yields a fresh, independent cursor; iterating does not
    /// consume or modify the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(10);
    /// cache.insert(20);
    /// cache.insert(30);
    ///
    /// let values: Vec<_> = cache.iter().copied().collect();
    /// assert_eq!(values, vec![30, 20, 10]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, N, F> {
        Iter {
            cache: self,
            pos: 1,
        }
    }

    /// Collects the residents into a `Vec` in newest-first order.
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 2> = BoundedOrderedCache::new();
    /// cache.insert(1);
    /// cache.insert(2);
    /// cache.insert(3); // evicts 1
    ///
    /// assert_eq!(cache.to_vec_newest_first(), vec![3, 2]);
    /// ```
    pub fn to_vec_newest_first(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an adapter that renders the residents space-separated in
    /// newest-first order. A pure consumer of [`iter`](Self::iter).
    ///
    /// # Example
    ///
    /// ```
    /// use streakcache::BoundedOrderedCache;
    ///
    /// let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
    /// cache.insert(1);
    /// cache.insert(2);
    /// cache.insert(3);
    ///
    /// assert_eq!(cache.display().to_string(), "3 2 1");
    /// ```
    pub fn display(&self) -> SpaceSeparated<Iter<'_, T, N, F>>
    where
        T: fmt::Display,
    {
        space_separated(self.iter())
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// Constant for a given `T` and `N`; the ring buffer is inline and the
    /// extrema are inline `Option`s.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
    }

    /// Validates the internal invariants, returning a description of the
    /// first violation found.
    ///
    /// Checked invariants: `len <= N`; the cursor stays in range; exactly the
    /// `len` logically newest slots are occupied; a non-empty cache has both
    /// extrema set.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len > N {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, N
            )));
        }
        if N == 0 {
            if self.cursor != 0 {
                return Err(InvariantError::new("nonzero cursor in zero-capacity cache"));
            }
            return Ok(());
        }
        if self.cursor >= N {
            return Err(InvariantError::new(format!(
                "cursor {} out of range for capacity {}",
                self.cursor, N
            )));
        }
        for (idx, slot) in self.data.iter().enumerate() {
            // Age 0 is the newest slot; residents are the `len` smallest ages.
            let age = (self.cursor + N - 1 - idx) % N;
            let resident = age < self.len;
            match (resident, slot.is_some()) {
                (true, false) => {
                    return Err(InvariantError::new(format!("resident slot {idx} is vacant")));
                }
                (false, true) => {
                    return Err(InvariantError::new(format!(
                        "vacant slot {idx} is occupied"
                    )));
                }
                _ => {}
            }
        }
        if self.len > 0 && (self.high.is_none() || self.low.is_none()) {
            return Err(InvariantError::new("occupied cache with unset extrema"));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if any internal invariant is violated.
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("invariant violated: {err}");
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a debug snapshot of the residents in newest-first order.
    pub fn debug_snapshot_newest_first(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec_newest_first()
    }
}

impl<T, const N: usize, F> fmt::Display for BoundedOrderedCache<T, N, F>
where
    T: fmt::Display,
    F: Fn(&T, &T) -> bool,
{
    /// Renders the residents space-separated in newest-first order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ---------------------------------------------------------------------------
// Iterator types (names match the methods that produce them)
// ---------------------------------------------------------------------------

/// Borrowed iterator over the residents of a [`BoundedOrderedCache`], from
/// newest to oldest.
///
/// Created by [`BoundedOrderedCache::iter`]. Cursors support structural
/// comparison: two cursors compare equal iff the elements they currently
/// point at compare equal by value (exhausted cursors only equal other
/// exhausted cursors), which makes them usable with generic algorithms that
/// expect comparable positions.
pub struct Iter<'a, T, const N: usize, F = fn(&T, &T) -> bool> {
    cache: &'a BoundedOrderedCache<T, N, F>,
    pos: usize, // 1-indexed: 1 = newest, cache.len() = oldest
}

impl<'a, T, const N: usize, F> Iter<'a, T, N, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Borrows the element this cursor currently points at without
    /// advancing, or `None` if the cursor is exhausted.
    pub fn peek(&self) -> Option<&'a T> {
        self.cache.kth_newest(self.pos)
    }
}

impl<T, const N: usize, F> Clone for Iter<'_, T, N, F> {
    fn clone(&self) -> Self {
        Iter {
            cache: self.cache,
            pos: self.pos,
        }
    }
}

impl<T, const N: usize, F> fmt::Debug for Iter<'_, T, N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("pos", &self.pos).finish_non_exhaustive()
    }
}

impl<'a, T, const N: usize, F> Iterator for Iter<'a, T, N, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.cache.kth_newest(self.pos)?;
        self.pos += 1;
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cache.len().saturating_sub(self.pos - 1);
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, F> ExactSizeIterator for Iter<'_, T, N, F> where F: Fn(&T, &T) -> bool {}

/// Cursor equality by dereferenced value: two cursors are equal iff the
/// elements they currently point at are equal (`!=` follows from the
/// blanket impl). Exhausted cursors compare equal to each other only.
impl<T, const N: usize, F> PartialEq for Iter<'_, T, N, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.peek(), other.peek()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T, const N: usize, F> IntoIterator for &'a BoundedOrderedCache<T, N, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyCacheError;

    #[test]
    fn insert_keeps_newest_first_order() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(10);
        cache.insert(20);
        cache.insert(30);
        assert_eq!(cache.to_vec_newest_first(), vec![30, 20, 10]);
        cache.debug_validate_invariants();
    }

    #[test]
    fn full_cache_evicts_oldest_on_insert() {
        let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
        for v in [1, 2, 3, 4] {
            cache.insert(v);
        }
        // First-inserted value is gone; exactly the last 3 remain, in order.
        assert_eq!(cache.to_vec_newest_first(), vec![4, 3, 2]);
        assert_eq!(cache.len(), 3);
        cache.debug_validate_invariants();
    }

    #[test]
    fn eviction_chain_empties_then_errors() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(3); // oldest
        cache.insert(2);
        cache.insert(1); // newest

        assert_eq!(cache.evict_oldest(), Ok(3));
        assert_eq!(cache.to_vec_newest_first(), vec![1, 2]);

        assert_eq!(cache.evict_oldest(), Ok(2));
        assert_eq!(cache.to_vec_newest_first(), vec![1]);

        assert_eq!(cache.evict_oldest(), Ok(1));
        assert!(cache.is_empty());

        assert_eq!(cache.evict_oldest(), Err(EmptyCacheError));
        cache.debug_validate_invariants();
    }

    #[test]
    fn eviction_is_position_based_not_value_based() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(7); // oldest
        cache.insert(5);
        cache.insert(7); // duplicate of the oldest, newer position
        cache.insert(9);

        assert_eq!(cache.evict_oldest(), Ok(7));
        // The newer duplicate 7 must survive.
        assert_eq!(cache.to_vec_newest_first(), vec![9, 7, 5]);
        cache.debug_validate_invariants();
    }

    #[test]
    fn extrema_walkthrough_5_2_9() {
        let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();

        cache.insert(5);
        assert_eq!(cache.streak_high(), Some(&5));
        assert_eq!(cache.streak_low(), Some(&5));

        cache.insert(2);
        assert_eq!(cache.streak_high(), Some(&5));
        assert_eq!(cache.streak_low(), Some(&2));

        cache.insert(9);
        assert_eq!(cache.streak_high(), Some(&9));
        assert_eq!(cache.streak_low(), Some(&2));
    }

    #[test]
    fn extrema_unset_before_first_insert() {
        let cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
        assert_eq!(cache.streak_high(), None);
        assert_eq!(cache.streak_low(), None);
    }

    #[test]
    fn extrema_stay_stale_after_eviction() {
        let mut cache: BoundedOrderedCache<i32, 2> = BoundedOrderedCache::new();
        cache.insert(9); // streak high
        cache.insert(1);
        cache.insert(4); // evicts 9

        // Documented contract: no rescan after eviction.
        assert_eq!(cache.streak_high(), Some(&9));
        assert_eq!(cache.streak_low(), Some(&1));
        assert_eq!(cache.to_vec_newest_first(), vec![4, 1]);
    }

    #[test]
    fn extrema_reset_when_streak_restarts() {
        let mut cache: BoundedOrderedCache<i32, 2> = BoundedOrderedCache::new();
        cache.insert(9);
        cache.insert(1);
        cache.evict_oldest().unwrap();
        cache.evict_oldest().unwrap();

        // Extrema survive emptying (never invalidated by eviction)...
        assert_eq!(cache.streak_high(), Some(&9));

        // ...but the next insert starts a fresh streak.
        cache.insert(5);
        assert_eq!(cache.streak_high(), Some(&5));
        assert_eq!(cache.streak_low(), Some(&5));
    }

    #[test]
    fn value_tied_with_both_extremes_updates_neither() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(5);
        cache.insert(5);
        cache.insert(5);
        assert_eq!(cache.streak_high(), Some(&5));
        assert_eq!(cache.streak_low(), Some(&5));
    }

    #[test]
    fn custom_order_drives_extrema() {
        // Reverse ordering: "high" tracks the minimum.
        let mut cache: BoundedOrderedCache<i32, 4, _> =
            BoundedOrderedCache::with_order(|a: &i32, b: &i32| a > b);
        cache.insert(5);
        cache.insert(2);
        cache.insert(9);
        assert_eq!(cache.streak_high(), Some(&2));
        assert_eq!(cache.streak_low(), Some(&9));
    }

    #[test]
    fn emplace_constructs_then_inserts() {
        let mut cache: BoundedOrderedCache<String, 4> = BoundedOrderedCache::new();
        cache.emplace("alpha");
        cache.emplace("beta");
        assert_eq!(
            cache.to_vec_newest_first(),
            vec!["beta".to_string(), "alpha".to_string()]
        );
    }

    #[test]
    fn try_emplace_failure_leaves_state_unchanged() {
        let mut cache: BoundedOrderedCache<u8, 4> = BoundedOrderedCache::new();
        cache.try_emplace(7i32).unwrap();
        assert_eq!(cache.len(), 1);

        let err = cache.try_emplace(300i32);
        assert!(err.is_err());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.streak_high(), Some(&7));
        cache.debug_validate_invariants();
    }

    #[test]
    fn peek_ends() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        assert_eq!(cache.peek_newest(), None);
        assert_eq!(cache.peek_oldest(), None);

        cache.insert(1);
        cache.insert(2);
        assert_eq!(cache.peek_newest(), Some(&2));
        assert_eq!(cache.peek_oldest(), Some(&1));
        assert_eq!(cache.len(), 2); // peeks do not remove
    }

    #[test]
    fn zero_capacity_is_permanently_empty() {
        let mut cache: BoundedOrderedCache<i32, 0> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 0);
        assert_eq!(cache.streak_high(), None);
        assert_eq!(cache.evict_oldest(), Err(EmptyCacheError));
        cache.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_residents_and_extrema() {
        let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.streak_high(), None);
        assert_eq!(cache.streak_low(), None);
        cache.debug_validate_invariants();

        // Reusable after clear.
        cache.insert(8);
        assert_eq!(cache.to_vec_newest_first(), vec![8]);
        assert_eq!(cache.streak_high(), Some(&8));
    }

    #[test]
    fn reusable_across_many_wraps() {
        let mut cache: BoundedOrderedCache<u32, 3> = BoundedOrderedCache::new();
        for v in 1..=10 {
            cache.insert(v);
            cache.debug_validate_invariants();
        }
        assert_eq!(cache.to_vec_newest_first(), vec![10, 9, 8]);

        cache.evict_oldest().unwrap();
        cache.insert(11);
        assert_eq!(cache.to_vec_newest_first(), vec![11, 10, 9]);
    }

    #[test]
    fn approx_bytes_covers_buffer() {
        let cache: BoundedOrderedCache<u64, 8> = BoundedOrderedCache::new();
        assert!(cache.approx_bytes() >= 8 * std::mem::size_of::<Option<u64>>());
    }

    // -----------------------------------------------------------------------
    // iter() / cursor tests
    // -----------------------------------------------------------------------

    #[test]
    fn iter_yields_newest_first() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(10);
        cache.insert(20);
        cache.insert(30);

        let v: Vec<_> = cache.iter().copied().collect();
        assert_eq!(v, vec![30, 20, 10]);
    }

    #[test]
    fn iter_is_restartable_and_idempotent() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);
        cache.insert(3);

        let first: Vec<_> = cache.iter().copied().collect();
        let second: Vec<_> = cache.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 3); // traversal does not mutate
    }

    #[test]
    fn iter_on_empty() {
        let cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        assert_eq!(cache.iter().count(), 0);
    }

    #[test]
    fn iter_after_wrap_sees_only_residents() {
        let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
        for v in 1..=6 {
            cache.insert(v);
        }
        let v: Vec<_> = cache.iter().copied().collect();
        assert_eq!(v, vec![6, 5, 4]);
    }

    #[test]
    fn iter_exact_size() {
        let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);

        let mut it = cache.iter();
        assert_eq!(it.len(), 2);
        it.next();
        assert_eq!(it.len(), 1);
        it.next();
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn ref_into_iter_for_loop() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(10);
        cache.insert(20);

        let mut sum = 0;
        for v in &cache {
            sum += v;
        }
        assert_eq!(sum, 30);
        assert_eq!(cache.len(), 2); // not consumed
    }

    #[test]
    fn cursor_equality_is_by_pointed_at_value() {
        let mut a: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        a.insert(1);
        a.insert(2);

        // Fresh cursors point at the same newest value.
        assert_eq!(a.iter(), a.iter());

        // Advance one cursor: values differ, cursors differ.
        let mut advanced = a.iter();
        advanced.next();
        assert_ne!(advanced.clone(), a.iter());

        // Cursors into different caches compare by value too.
        let mut b: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        b.insert(9);
        b.insert(2);
        assert_eq!(a.iter(), b.iter()); // both point at 2
    }

    #[test]
    fn exhausted_cursors_compare_equal() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(1);

        let mut x = cache.iter();
        let mut y = cache.iter();
        x.next();
        y.next();
        assert_eq!(x, y);

        // Exhausted never equals a live cursor.
        assert_ne!(x, cache.iter());
    }

    #[test]
    fn cursor_peek_does_not_advance() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);

        let mut it = cache.iter();
        assert_eq!(it.peek(), Some(&2));
        assert_eq!(it.peek(), Some(&2));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.peek(), Some(&1));
    }

    // -----------------------------------------------------------------------
    // Display tests
    // -----------------------------------------------------------------------

    #[test]
    fn display_renders_space_separated_newest_first() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        cache.insert(1);
        cache.insert(2);
        cache.insert(3);

        assert_eq!(cache.to_string(), "3 2 1");
        assert_eq!(cache.display().to_string(), "3 2 1");
    }

    #[test]
    fn display_of_empty_cache_is_empty_string() {
        let cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        assert_eq!(cache.to_string(), "");
    }

    // -----------------------------------------------------------------------
    // Invariant checker tests
    // -----------------------------------------------------------------------

    #[test]
    fn check_invariants_on_fresh_and_exercised_cache() {
        let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
        assert!(cache.check_invariants().is_ok());

        for v in 0..10 {
            cache.insert(v);
            assert!(cache.check_invariants().is_ok());
        }
        while cache.evict_oldest().is_ok() {
            assert!(cache.check_invariants().is_ok());
        }
    }
}
