//! Parse crossword structures and word lists from text

use crate::collections::Grid;
use crate::error::{ParseError, ParseErrorType::*, Position};
use crate::puzzle::Word;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// The character marking a cell which holds a letter. Any other character is a blocked cell.
pub const FILLABLE: char = '_';

/// Parse a structure with one line per row. Short rows are padded with blocked cells.
pub fn parse_structure(s: &str) -> Result<Grid<bool>> {
    let rows: Vec<Vec<bool>> = s
        .lines()
        .map(|line| line.chars().map(|c| c == FILLABLE).collect())
        .collect();
    if rows.is_empty() {
        return Err(ParseError::from_type(EmptyStructure));
    }
    Ok(Grid::from_ragged_rows(rows, false))
}

/// Parse a list of words with one word per line
pub fn parse_words(s: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.chars().any(char::is_whitespace) {
            let column = line.chars().take_while(|c| c.is_whitespace()).count() + 1;
            let position = Position { line: i + 1, column };
            return Err(ParseError::new(InvalidWord, word, position));
        }
        words.push(Word::from(word.to_uppercase().as_str()));
    }
    Ok(words)
}
