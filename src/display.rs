//! Space-separated rendering of traversal output.
//!
//! A pure consumer of the iteration interface: the adapter works over any
//! cloneable iterator of displayable items and never touches cache internals.
//!
//! ## Key Components
//!
//! - [`SpaceSeparated`]: `fmt::Display` adapter over an iterator
//! - [`space_separated`]: constructor function
//!
//! ## Example Usage
//!
//! ```
//! use streakcache::BoundedOrderedCache;
//! use streakcache::display::space_separated;
//!
//! let mut cache: BoundedOrderedCache<i32, 4> = BoundedOrderedCache::new();
//! cache.insert(1);
//! cache.insert(2);
//! cache.insert(3);
//!
//! // Same order as traversal: newest first
//! assert_eq!(space_separated(cache.iter()).to_string(), "3 2 1");
//!
//! // Works over any iterator, not just cache cursors
//! assert_eq!(space_separated([7, 8, 9].iter()).to_string(), "7 8 9");
//! ```

use std::fmt;

/// `fmt::Display` adapter that renders iterator items space-separated.
///
/// Created by [`space_separated`] or
/// [`BoundedOrderedCache::display`](crate::BoundedOrderedCache::display).
/// The underlying iterator is cloned on each format call, so the adapter can
/// be displayed repeatedly.
#[derive(Debug, Clone)]
pub struct SpaceSeparated<I> {
    iter: I,
}

/// Wraps an iterator in a [`SpaceSeparated`] display adapter.
///
/// # Example
///
/// ```
/// use streakcache::display::space_separated;
///
/// let rendered = space_separated(["a", "b", "c"].iter()).to_string();
/// assert_eq!(rendered, "a b c");
/// ```
pub fn space_separated<I>(iter: I) -> SpaceSeparated<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    SpaceSeparated { iter }
}

impl<I> fmt::Display for SpaceSeparated<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.iter.clone() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}
