use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::grid::Coord;

/// The direction in which the letters of a slot are written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down,
    Across,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Down, Direction::Across];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Across => "across",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run of fillable cells which holds one word
///
/// Two slots are the same slot only if their start, direction and length all match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    start: Coord,
    direction: Direction,
    length: usize,
}

impl Slot {
    pub fn new(start: Coord, direction: Direction, length: usize) -> Self {
        Self {
            start,
            direction,
            length,
        }
    }

    /// The coordinate of the first letter
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of letters in the slot
    pub fn len(&self) -> usize {
        self.length
    }

    /// The coordinate of the letter at `offset`
    pub fn cell(&self, offset: usize) -> Coord {
        debug_assert!(offset < self.length);
        self.start.step(self.direction, offset)
    }

    /// The coordinates of every letter, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let slot = *self;
        (0..slot.length).map(move |offset| slot.cell(offset))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.start.row(),
            self.start.col(),
            self.direction,
            self.length
        )
    }
}
