use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::Grid;
use crate::puzzle::Crossword;

const BLOCKED_CELL: char = '█';
const EMPTY_CELL: char = ' ';

/// Prints a crossword as text with the letters of a solution
pub struct SolutionDisplay<'a> {
    crossword: &'a Crossword,
    letters: Grid<Option<char>>,
}

impl<'a> SolutionDisplay<'a> {
    pub(crate) fn new(crossword: &'a Crossword, letters: Grid<Option<char>>) -> Self {
        Self { crossword, letters }
    }
}

impl Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (coord, &fillable) in self.crossword.structure().iter_coord() {
            let c = if fillable {
                self.letters[coord].unwrap_or(EMPTY_CELL)
            } else {
                BLOCKED_CELL
            };
            write!(f, "{}", c)?;
            if coord.col() + 1 == self.crossword.width() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
