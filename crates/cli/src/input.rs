//! Typed parsing of raw terminal lines.
//!
//! The engine never sees malformed text: every line is classified here first,
//! and parse failures carry a reason the shell can show before re-prompting.

use std::fmt;

use polyquiz::prelude::Coord;

/// One classified line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// The `#` sentinel: finalize the shape / quit the query loop.
    Finish,
    Coord(Coord),
    Invalid(ParseError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of whitespace-separated tokens (expected exactly 2).
    TokenCount(usize),
    /// A token that does not parse as an integer.
    BadNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TokenCount(n) => {
                write!(f, "expected two integers in x y format, got {n} token(s)")
            }
            ParseError::BadNumber(tok) => write!(f, "'{tok}' is not an integer"),
        }
    }
}

/// Classify a raw line: sentinel, coordinate, or invalid with reason.
pub fn parse_line(line: &str) -> Input {
    let s = line.trim();
    if s == "#" {
        return Input::Finish;
    }
    match parse_coord(s) {
        Ok(c) => Input::Coord(c),
        Err(e) => Input::Invalid(e),
    }
}

/// Parse `x y` into a `Coord`.
pub fn parse_coord(s: &str) -> Result<Coord, ParseError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseError::TokenCount(tokens.len()));
    }
    let x = tokens[0]
        .parse::<i64>()
        .map_err(|_| ParseError::BadNumber(tokens[0].to_string()))?;
    let y = tokens[1]
        .parse::<i64>()
        .map_err(|_| ParseError::BadNumber(tokens[1].to_string()))?;
    Ok(Coord::new(x, y))
}
