//! # Lexer
//!
//! Tokenizes tinyc source text in a single left-to-right scan.
//!
//! ## Character classes
//!
//! | First character | Token |
//! |-----------------|-------|
//! | `(` / `)`       | `Paren` |
//! | whitespace      | (skipped, see [`is_whitespace`]) |
//! | `0-9`           | `Number`, greedy run of digits |
//! | `"`             | `String`, up to the next `"` |
//! | `A-Z` / `a-z`   | `Name`, greedy run of letters |
//!
//! Anything else aborts with `UnrecognizedCharacter`.
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 3)").tokenize().unwrap();
//! assert_eq!(tokens[1].kind(), TokenKind::Name);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Paren, Token, TokenKind};

use crate::error::ParseError;
use crate::position::Position;
use config::constants::{CLOSE_PAREN, OPEN_PAREN, STRING_DELIMITER};

// =============================================================================
// LEXER
// =============================================================================

/// tinyc lexer.
///
/// Converts source text into a stream of tokens. No backtracking: every
/// character is looked at once.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens in source order, or the first lexical error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tinyc_parser::lexer::Lexer;
    ///
    /// let tokens = Lexer::new("(add 22 \"x\")").tokenize().unwrap();
    /// assert_eq!(tokens.len(), 5);
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.position();

            match c {
                _ if c == OPEN_PAREN => {
                    self.cursor.advance();
                    self.tokens.push(Token::Paren(Paren::Open));
                }
                _ if c == CLOSE_PAREN => {
                    self.cursor.advance();
                    self.tokens.push(Token::Paren(Paren::Close));
                }
                _ if c == STRING_DELIMITER => self.scan_string(start)?,
                _ if is_whitespace(c) => self.cursor.advance_while(is_whitespace),
                '0'..='9' => self.scan_number(),
                'a'..='z' | 'A'..='Z' => self.scan_name(),
                _ => return Err(ParseError::unrecognized_character(c, start)),
            }
        }

        tracing::debug!(tokens = self.tokens.len(), "tokenized source");
        Ok(self.tokens)
    }

    /// Scan a string literal. The cursor is on the opening quote.
    fn scan_string(&mut self, start: Position) -> Result<(), ParseError> {
        self.cursor.advance();
        let value = self.cursor.consume_while(|c| c != STRING_DELIMITER);

        if self.cursor.advance().is_none() {
            return Err(ParseError::unterminated_string(start));
        }

        self.tokens.push(Token::String(value.to_string()));
        Ok(())
    }

    /// Scan a number literal. `22` is one token, not two.
    fn scan_number(&mut self) {
        let text = self.cursor.consume_while(|c| c.is_ascii_digit());
        self.tokens.push(Token::Number(text.to_string()));
    }

    /// Scan a call name.
    fn scan_name(&mut self) {
        let text = self.cursor.consume_while(|c| c.is_ascii_alphabetic());
        self.tokens.push(Token::Name(text.to_string()));
    }
}

/// Separator characters: ASCII tab, newline, vertical tab, form feed,
/// carriage return and space, plus the Unicode space separators, line and
/// paragraph separators, and the byte order mark.
///
/// This is the regex `\s` class, which differs from [`char::is_whitespace`]:
/// U+FEFF counts as whitespace here, U+0085 does not.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// =============================================================================
// TESTS
// =============================================================================
