//! Collection types used by the puzzle and the solver

pub mod grid;
mod range_set;

pub use self::grid::Grid;
pub use self::range_set::RangeSet;

use linked_hash_set::LinkedHashSet;

/// A hash set which remembers insertion order, used as a de-duplicating work queue
pub type LinkedAHashSet<T> = LinkedHashSet<T, ahash::RandomState>;
