//! # Errors
//!
//! Error types for the front end of the pipeline.
//!
//! - [`ParseError`]: bad user input, raised by the lexer and the parser.
//! - [`NodeError`]: a tree that arrived from outside the typed pipeline
//!   (see [`crate::serialized`]) does not have a known shape.
//!
//! Every error is terminal: compilation stops at the first one.
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::error::{ParseError, ParseErrorKind};
//! use tinyc_parser::position::Position;
//!
//! let error = ParseError::unrecognized_character('%', Position::new(3, 0, 3));
//! assert!(matches!(error.kind, ParseErrorKind::UnrecognizedCharacter { character: '%' }));
//! assert_eq!(error.to_string(), "unrecognized character '%' at line 1, column 4");
//! ```

use crate::lexer::TokenKind;
use crate::position::{Location, Position};
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A lexing or parsing failure with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Where the error was detected.
    pub location: Location,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Character outside every recognized class.
    pub fn unrecognized_character(character: char, position: Position) -> Self {
        Self::new(
            ParseErrorKind::UnrecognizedCharacter { character },
            Location::Source(position),
        )
    }

    /// String literal with no closing quote; `position` is the opening quote.
    pub fn unterminated_string(position: Position) -> Self {
        Self::new(ParseErrorKind::UnterminatedString, Location::Source(position))
    }

    /// Token that cannot start or continue an expression.
    pub fn unexpected_token(found: TokenKind, expected: &'static str, index: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken { found, expected },
            Location::Token(index),
        )
    }

    /// Token stream ran out mid-expression.
    pub fn unexpected_eof(expected: &'static str, index: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof { expected },
            Location::Token(index),
        )
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The lexer met a character that starts no token.
    #[error("unrecognized character '{character}'")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
    },

    /// A `"` with no matching closing `"` before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Found a token that does not fit the grammar here.
    ///
    /// A stray `)`, or a `(` followed by something other than a name.
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        /// Kind of the token that was found.
        found: TokenKind,
        /// Description of what was expected.
        expected: &'static str,
    },

    /// Input ended inside an unclosed call.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: &'static str,
    },
}

// =============================================================================
// NODE ERROR
// =============================================================================

/// A serialized tree does not describe a well-formed AST.
///
/// The typed ASTs make these impossible inside the pipeline; they can only
/// come from trees read in from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The node's `type` tag is outside the closed set of node kinds.
    #[error("unknown node type '{node_type}'")]
    UnknownNodeType {
        /// The unrecognized tag.
        node_type: String,
    },

    /// A known node kind where the tree shape does not allow it.
    #[error("node type '{node_type}' is not allowed as {context}")]
    MisplacedNode {
        /// The node's tag.
        node_type: String,
        /// Where it was found.
        context: &'static str,
    },

    /// A field the node kind requires is absent.
    #[error("node type '{node_type}' is missing field '{field}'")]
    MissingField {
        /// The node's tag.
        node_type: String,
        /// The absent field.
        field: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::unexpected_token(TokenKind::CloseParen, "expression", 0);
        let msg = error.to_string();
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("expression"));
        assert!(msg.contains("token 0"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("')'", 4);
        assert!(error.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_unterminated_string_location() {
        let error = ParseError::unterminated_string(Position::new(5, 0, 5));
        assert_eq!(error.kind, ParseErrorKind::UnterminatedString);
        assert_eq!(error.location, Location::Source(Position::new(5, 0, 5)));
    }

    #[test]
    fn test_unknown_node_type_display() {
        let error = NodeError::UnknownNodeType { node_type: "Lambda".to_string() };
        assert_eq!(error.to_string(), "unknown node type 'Lambda'");
    }
}
