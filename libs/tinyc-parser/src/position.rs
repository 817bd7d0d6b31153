//! # Source Positions
//!
//! Locations used by error reporting. The lexer reports a `Position` in the
//! source text; the parser reports the index of the offending token, since
//! tokens carry no position of their own.
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::position::{Location, Position};
//!
//! let location = Location::Source(Position::new(4, 0, 4));
//! assert_eq!(location.to_string(), "line 1, column 5");
//! ```

use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// `line` and `column` are 0-indexed; `Display` renders them 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// LOCATION
// =============================================================================

/// Where an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A position in the source text (lexer errors).
    Source(Position),
    /// An index into the token stream (parser errors).
    Token(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(position) => position.fmt(f),
            Self::Token(index) => write!(f, "token {}", index),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
