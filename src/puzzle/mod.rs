//! Crossword structures and word lists

pub use self::crossword::{Crossword, Overlap};
pub use self::display::SolutionDisplay;
pub use self::slot::{Direction, Slot};
pub use self::vocabulary::{Vocabulary, Word, WordId};

mod crossword;
mod display;
pub(crate) mod parse;
mod slot;
mod vocabulary;

/// Index of a slot in a `Crossword`
pub type SlotId = usize;
