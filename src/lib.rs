//! streakcache: fixed-capacity insertion-ordered caching with incremental
//! streak extrema tracking.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod cache;
pub mod display;
pub mod error;
pub mod order;

pub mod prelude;

pub use cache::{BoundedOrderedCache, Iter};
pub use error::{EmptyCacheError, InvariantError};
