use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use itertools::Itertools;
use vec_map::VecMap;

use crate::collections::Grid;
use crate::error::{FromFileError, ParseError};
use crate::puzzle::parse::{parse_structure, FILLABLE};
use crate::puzzle::{Direction, Slot, SlotId, SolutionDisplay};
use crate::solve::Solution;

const BLOCKED: char = '#';

/// The cell shared by two crossing slots, given as the offset of the cell within each slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    /// offset in the first slot
    pub a: usize,
    /// offset in the second slot
    pub b: usize,
}

impl Overlap {
    /// The same overlap seen from the other slot
    pub fn reverse(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// An unfilled crossword
///
/// Holds the grid of fillable cells, the slots found in the grid,
/// and the overlap of every pair of crossing slots.
#[derive(Debug)]
pub struct Crossword {
    structure: Grid<bool>,
    slots: Vec<Slot>,
    /// for each slot, the overlap with each neighboring slot
    overlaps: Vec<VecMap<Overlap>>,
}

impl Crossword {
    /// Creates a crossword from a grid where `true` marks a fillable cell
    pub fn new(structure: Grid<bool>) -> Self {
        let slots = find_slots(&structure);
        let overlaps = find_overlaps(&structure, &slots);
        debug!(
            "Found {} slots and {} crossings in a {}x{} grid",
            slots.len(),
            overlaps.iter().map(VecMap::len).sum::<usize>() / 2,
            structure.width(),
            structure.height()
        );
        Self {
            structure,
            slots,
            overlaps,
        }
    }

    /// Reads a structure file. See [`Crossword::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let crossword = Self::parse(&s)?;
        Ok(crossword)
    }

    /// Parses a structure with one line per row, where `_` marks a fillable cell
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_structure(s).map(Self::new)
    }

    pub fn width(&self) -> usize {
        self.structure.width()
    }

    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// The grid of cells where `true` marks a fillable cell
    pub fn structure(&self) -> &Grid<bool> {
        &self.structure
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The IDs of all slots
    pub fn variables(&self) -> impl Iterator<Item = SlotId> {
        0..self.slots.len()
    }

    /// The slots which cross the given slot, in ascending order
    pub fn neighbors(&self, id: SlotId) -> impl Iterator<Item = SlotId> + '_ {
        self.overlaps[id].keys()
    }

    /// The number of slots crossing the given slot
    pub fn degree(&self, id: SlotId) -> usize {
        self.overlaps[id].len()
    }

    /// The shared cell of two slots, if they cross
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        self.overlaps[a].get(b).copied()
    }

    /// The letters of a (possibly partial) solution placed in the grid
    pub fn letter_grid(&self, solution: &Solution) -> Grid<Option<char>> {
        let mut letters = Grid::with_value(self.width(), self.height(), None);
        for (id, word) in solution.iter() {
            for (coord, &letter) in self.slot(id).cells().zip(word.letters()) {
                letters[coord] = Some(letter);
            }
        }
        letters
    }

    /// Displays the grid filled in with a solution
    pub fn display_solution(&self, solution: &Solution) -> SolutionDisplay<'_> {
        SolutionDisplay::new(self, self.letter_grid(solution))
    }

    /// Checks that a solution fills every slot with a word of the right length,
    /// uses no word twice, and agrees on the letter of every shared cell
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.len() != self.slot_count() {
            return false;
        }
        let mut words = Vec::with_capacity(self.slot_count());
        for id in self.variables() {
            let word = match solution.get(id) {
                Some(word) => word,
                None => return false,
            };
            if word.len() != self.slots[id].len() {
                return false;
            }
            words.push(word);
        }
        let mut seen: AHashSet<_> = AHashSet::default();
        if !words.iter().all(|word| seen.insert(*word)) {
            return false;
        }
        self.variables().all(|a| {
            self.overlaps[a]
                .iter()
                .all(|(b, overlap)| words[a].letter(overlap.a) == words[b].letter(overlap.b))
        })
    }
}

impl Display for Crossword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.structure.rows() {
            for &fillable in row {
                let c = if fillable { FILLABLE } else { BLOCKED };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn find_slots(structure: &Grid<bool>) -> Vec<Slot> {
    let is_fillable = |coord| structure.get(coord).copied().unwrap_or(false);
    let mut slots = Vec::new();
    for coord in structure.coords().filter(|&coord| structure[coord]) {
        for &direction in &Direction::ALL {
            let starts_word = coord
                .previous(direction)
                .map_or(true, |previous| !structure[previous]);
            if !starts_word {
                continue;
            }
            let length = (0..)
                .take_while(|&offset| is_fillable(coord.step(direction, offset)))
                .count();
            // a single cell is not a word
            if length > 1 {
                slots.push(Slot::new(coord, direction, length));
            }
        }
    }
    slots
}

fn find_overlaps(structure: &Grid<bool>, slots: &[Slot]) -> Vec<VecMap<Overlap>> {
    let mut cell_slots: Grid<Vec<(SlotId, usize)>> =
        Grid::with_value(structure.width(), structure.height(), Vec::new());
    for (id, slot) in slots.iter().enumerate() {
        for (offset, coord) in slot.cells().enumerate() {
            cell_slots[coord].push((id, offset));
        }
    }
    let mut overlaps = vec![VecMap::new(); slots.len()];
    for (_, entries) in cell_slots.iter_coord() {
        for (&(a, offset_a), &(b, offset_b)) in entries.iter().tuple_combinations() {
            let overlap = Overlap {
                a: offset_a,
                b: offset_b,
            };
            overlaps[a].insert(b, overlap);
            overlaps[b].insert(a, overlap.reverse());
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use crate::collections::grid::Coord;
    use crate::puzzle::{Crossword, Direction, Overlap, Slot};
    use crate::solve::Solution;

    const STRUCTURE: &str = "\
        #___#\n\
        #_##_\n\
        #_##_\n\
        #_##_\n\
        #____\n";

    #[test]
    fn slots() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(
            &[
                Slot::new(Coord::new(1, 0), Direction::Down, 5),
                Slot::new(Coord::new(1, 0), Direction::Across, 3),
                Slot::new(Coord::new(4, 1), Direction::Down, 4),
                Slot::new(Coord::new(1, 4), Direction::Across, 4),
            ],
            crossword.slots()
        );
    }

    #[test]
    fn overlaps_are_symmetric() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(Some(Overlap { a: 0, b: 0 }), crossword.overlap(0, 1));
        assert_eq!(Some(Overlap { a: 4, b: 0 }), crossword.overlap(0, 3));
        assert_eq!(Some(Overlap { a: 0, b: 4 }), crossword.overlap(3, 0));
        assert_eq!(Some(Overlap { a: 3, b: 3 }), crossword.overlap(2, 3));
        assert_eq!(None, crossword.overlap(1, 2));
        assert_eq!(None, crossword.overlap(1, 1));
        for a in crossword.variables() {
            for b in crossword.variables() {
                assert_eq!(
                    crossword.overlap(a, b).map(Overlap::reverse),
                    crossword.overlap(b, a)
                );
            }
        }
    }

    #[test]
    fn neighbors() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        assert_eq!(vec![1, 3], crossword.neighbors(0).collect::<Vec<_>>());
        assert_eq!(vec![0, 2], crossword.neighbors(3).collect::<Vec<_>>());
        assert_eq!(2, crossword.degree(3));
        assert_eq!(1, crossword.degree(1));
    }

    #[test]
    fn single_cells_are_not_slots() {
        let crossword = Crossword::parse("_#_\n###\n_#_").unwrap();
        assert_eq!(0, crossword.slot_count());
    }

    #[test]
    fn verify_solution() {
        let crossword = Crossword::parse(STRUCTURE).unwrap();
        let solution = |words: &[&str]| -> Solution {
            let mut solution = Solution::default();
            for (id, &word) in words.iter().enumerate() {
                solution.insert(id, word.into());
            }
            solution
        };
        assert!(crossword.verify_solution(&solution(&["SEVEN", "SIX", "FIVE", "NINE"])));
        // wrong letter where slots 0 and 3 cross
        assert!(!crossword.verify_solution(&solution(&["SEVEX", "SIX", "FIVE", "NINE"])));
        // word used twice
        assert!(!crossword.verify_solution(&solution(&["SEVEN", "SIX", "NINE", "NINE"])));
        // wrong length
        assert!(!crossword.verify_solution(&solution(&["SEVEN", "SIXY", "FIVE", "NINE"])));
        // missing slot
        assert!(!crossword.verify_solution(&solution(&["SEVEN", "SIX", "FIVE"])));
    }

    #[test]
    fn display_structure() {
        let crossword = Crossword::parse("__\n_").unwrap();
        assert_eq!("__\n_#\n", crossword.to_string());
    }
}
