pub use crate::cache::{BoundedOrderedCache, Iter};
pub use crate::display::{space_separated, SpaceSeparated};
pub use crate::error::{EmptyCacheError, InvariantError};
pub use crate::order::{natural_order, reverse_order};
