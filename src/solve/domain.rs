use std::ops::{Deref, Index, IndexMut};

use crate::collections::RangeSet;
use crate::puzzle::{Crossword, SlotId, Vocabulary, WordId};

/// The words which may still be placed in a slot
#[derive(Clone, Debug, PartialEq)]
pub struct WordSet(RangeSet);

impl WordSet {
    /// Creates a set with every word of a vocabulary of `vocabulary_len` words
    pub fn with_all(vocabulary_len: usize) -> Self {
        WordSet(RangeSet::with_all(vocabulary_len))
    }

    pub fn remove(&mut self, word: WordId) -> bool {
        self.0.remove(word)
    }

    /// Removes every word for which `f` returns false. Returns the number of words removed.
    pub fn retain(&mut self, f: impl FnMut(WordId) -> bool) -> usize {
        self.0.retain(f)
    }
}

impl Deref for WordSet {
    type Target = RangeSet;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The candidate words of every slot in a crossword
#[derive(Clone, Debug, PartialEq)]
pub struct Domains {
    domains: Vec<WordSet>,
}

impl Domains {
    /// Every slot starts with every word in the vocabulary
    pub fn new(crossword: &Crossword, vocabulary: &Vocabulary) -> Self {
        Self {
            domains: vec![WordSet::with_all(vocabulary.len()); crossword.slot_count()],
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The sum of the sizes of all domains
    pub fn word_count(&self) -> usize {
        self.domains.iter().map(|domain| domain.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &WordSet)> {
        self.domains.iter().enumerate()
    }
}

impl Index<SlotId> for Domains {
    type Output = WordSet;

    fn index(&self, slot: SlotId) -> &Self::Output {
        &self.domains[slot]
    }
}

impl IndexMut<SlotId> for Domains {
    fn index_mut(&mut self, slot: SlotId) -> &mut Self::Output {
        &mut self.domains[slot]
    }
}
