use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::iter::FromIterator;
use std::path::Path;

use crate::error::{FromFileError, ParseError};
use crate::puzzle::parse::parse_words;

/// Index of a word in a `Vocabulary`
pub type WordId = usize;

/// A candidate word, compared letter by letter
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<[char]>);

impl Word {
    /// The number of letters in the word
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The letter at `offset`
    pub fn letter(&self, offset: usize) -> char {
        self.0[offset]
    }

    /// The letter at `offset`, or `None` if the word is too short
    pub fn get(&self, offset: usize) -> Option<char> {
        self.0.get(offset).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// The set of words available to fill a crossword
///
/// Every word appears once. Words are kept in sorted order so that a word's `WordId` does not depend on
/// the order in which the words were provided.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Reads a word list file. See [`Vocabulary::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let vocabulary = Self::parse(&s)?;
        Ok(vocabulary)
    }

    /// Parses a word list with one word per line. Words are upper-cased and blank lines are skipped.
    /// A line holding more than one word is rejected rather than split.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_words(s).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Finds the ID of a word by its text
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words.binary_search(&Word::from(word)).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Word::from))
    }
}
