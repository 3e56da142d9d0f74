use std::fmt;
use std::fmt::Debug;

use crate::puzzle::Direction;

/// A `Coord` struct represents coordinates of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord<T = usize>([T; 2]);

impl<T> Coord<T>
where
    T: Copy,
{
    pub fn new(col: T, row: T) -> Self {
        Self([col, row])
    }

    pub fn col(self) -> T {
        self.0[0]
    }

    pub fn row(self) -> T {
        self.0[1]
    }
}

impl Coord {
    /// The coordinate `distance` cells away in the given direction
    pub fn step(self, direction: Direction, distance: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.col() + distance, self.row()),
            Direction::Down => Self::new(self.col(), self.row() + distance),
        }
    }

    /// The coordinate one cell back in the given direction, if any
    pub fn previous(self, direction: Direction) -> Option<Self> {
        let coord = match direction {
            Direction::Across => Self::new(self.col().checked_sub(1)?, self.row()),
            Direction::Down => Self::new(self.col(), self.row().checked_sub(1)?),
        };
        Some(coord)
    }
}

impl<T> Debug for Coord<T>
where
    T: Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.col(), self.row())
    }
}
