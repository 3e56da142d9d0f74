use std::ops::{Deref, DerefMut};

use ahash::AHashSet;
use vec_map::VecMap;

use crate::puzzle::{Crossword, SlotId, Vocabulary, WordId};
use crate::solve::{Problem, Solution};

/// A partial mapping of slots to words
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    words: VecMap<WordId>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.words.get(slot).copied()
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.words.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if every slot of the crossword has a word
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        crossword.variables().all(|slot| self.contains(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words.iter().map(|(slot, &word)| (slot, word))
    }

    /// Assigns a word to an unassigned slot. The slot is unassigned again when the binding is
    /// dropped unless [`Binding::keep`] is called.
    pub fn bind(&mut self, slot: SlotId, word: WordId) -> Binding<'_> {
        debug_assert!(!self.contains(slot), "slot {} is already assigned", slot);
        self.words.insert(slot, word);
        Binding {
            assignment: self,
            slot,
            keep: false,
        }
    }

    /// Returns true if every assigned word has the length of its slot, no word is used twice,
    /// and crossing words agree on the letter of the shared cell.
    /// Unassigned slots impose nothing.
    pub fn is_consistent(&self, problem: Problem<'_>) -> bool {
        let Problem {
            crossword,
            vocabulary,
        } = problem;
        let mut used: AHashSet<_> = AHashSet::default();
        for (slot, word) in self.iter() {
            if vocabulary.word(word).len() != crossword.slot(slot).len() {
                return false;
            }
            if !used.insert(word) {
                return false;
            }
            for neighbor in crossword.neighbors(slot) {
                let other = match self.get(neighbor) {
                    Some(other) => other,
                    None => continue,
                };
                let overlap = match crossword.overlap(slot, neighbor) {
                    Some(overlap) => overlap,
                    None => continue,
                };
                if !problem.letters_agree(overlap, word, other) {
                    return false;
                }
            }
        }
        true
    }

    /// The words of the assignment
    pub fn to_solution(&self, vocabulary: &Vocabulary) -> Solution {
        let mut solution = Solution::default();
        for (slot, word) in self.iter() {
            solution.insert(slot, vocabulary.word(word).clone());
        }
        solution
    }
}

/// A word assigned to a slot for as long as the binding lives
pub struct Binding<'a> {
    assignment: &'a mut Assignment,
    slot: SlotId,
    keep: bool,
}

impl Binding<'_> {
    /// Leaves the word in place after the binding is dropped
    pub fn keep(mut self) {
        self.keep = true;
    }
}

impl Deref for Binding<'_> {
    type Target = Assignment;

    fn deref(&self) -> &Self::Target {
        self.assignment
    }
}

impl DerefMut for Binding<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.assignment
    }
}

impl Drop for Binding<'_> {
    fn drop(&mut self) {
        if !self.keep {
            self.assignment.words.remove(self.slot);
        }
    }
}
