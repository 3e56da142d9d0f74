use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FromFileError {
    #[error("error reading file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A line and column in a text input, both starting at 1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    position: Option<Position>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseErrorType, token: impl Display, position: Position) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            position: Some(position),
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            position: None,
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorType {
    EmptyStructure,
    InvalidWord,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::EmptyStructure => "Structure has no rows",
            ParseErrorType::InvalidWord => "Invalid word",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(position) = &self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseError, ParseErrorType, Position};

    #[test]
    fn display_with_token() {
        let error = ParseError::new(
            ParseErrorType::InvalidWord,
            "TWO WORDS",
            Position { line: 3, column: 1 },
        );
        assert_eq!(r#"Invalid word: "TWO WORDS" at 3:1"#, error.to_string());
    }

    #[test]
    fn display_type_only() {
        let error = ParseError::from_type(ParseErrorType::EmptyStructure);
        assert_eq!("Structure has no rows", error.to_string());
    }
}
