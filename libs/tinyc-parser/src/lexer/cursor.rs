//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add");
//! assert_eq!(cursor.peek(), Some('a'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('d'));
//! ```

use crate::position::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// Only ever moves forward; the lexer never backtracks.
///
/// ## Example
///
/// ```rust
/// use tinyc_parser::lexer::Cursor;
///
/// let mut cursor = Cursor::new("22 3");
/// assert_eq!(cursor.consume_while(|c| c.is_ascii_digit()), "22");
/// assert_eq!(cursor.position().byte, 2);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Get current position.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ## Returns
    ///
    /// Current character or None if at EOF
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tinyc_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance while predicate is true and return the consumed slice.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tinyc_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// assert_eq!(cursor.consume_while(|c| c.is_ascii_alphabetic()), "abc");
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        self.advance_while(predicate);
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
