use std::ops::Index;

use vec_map::VecMap;

use crate::puzzle::{SlotId, Word};

/// The words placed in a crossword, by slot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    words: VecMap<Word>,
}

impl Solution {
    pub fn get(&self, slot: SlotId) -> Option<&Word> {
        self.words.get(slot)
    }

    /// Places a word in a slot, returning the word previously there
    pub fn insert(&mut self, slot: SlotId, word: Word) -> Option<Word> {
        self.words.insert(slot, word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Word)> {
        self.words.iter()
    }
}

impl Index<SlotId> for Solution {
    type Output = Word;

    fn index(&self, slot: SlotId) -> &Self::Output {
        &self.words[slot]
    }
}
