//! # Tokens
//!
//! Token types for the tinyc lexer.
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::Number("10".to_string());
//! assert_eq!(token.kind(), TokenKind::Number);
//! ```

use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// Tokens appear in source order and carry no position beyond that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(` or `)`
    Paren(Paren),
    /// Run of ASCII digits, kept verbatim.
    Number(String),
    /// Contents of a string literal, quotes stripped.
    String(String),
    /// Run of ASCII letters.
    Name(String),
}

impl Token {
    /// The token's kind tag.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Paren(Paren::Open) => TokenKind::OpenParen,
            Self::Paren(Paren::Close) => TokenKind::CloseParen,
            Self::Number(_) => TokenKind::Number,
            Self::String(_) => TokenKind::String,
            Self::Name(_) => TokenKind::Name,
        }
    }

    /// The token's text as written (strings without their quotes).
    pub fn text(&self) -> &str {
        match self {
            Self::Paren(Paren::Open) => "(",
            Self::Paren(Paren::Close) => ")",
            Self::Number(text) | Self::String(text) | Self::Name(text) => text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.text())
    }
}

/// Which side of a call a paren token is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Number literal like `42`
    Number,
    /// String literal like `"hello"`
    String,
    /// Call name like `add`
    Name,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::Number => "number",
            Self::String => "string",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================
