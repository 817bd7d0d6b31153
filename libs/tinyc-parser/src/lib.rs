//! # tinyc Parser
//!
//! Front end of the tinyc compiler: turns s-expression source text into a
//! source AST, and walks that AST.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program (source AST) → traverse(visitor)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::{parse, tokenize};
//!
//! let tokens = tokenize("(add 2 (subtract 4 2))").unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the tinyc pipeline:
//!
//! ```text
//! tinyc-parser → tinyc-transform → tinyc-compiler
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod serialized;
pub mod visitor;

// Re-export public API
pub use ast::{CallExpression, Node, NodeKind, NumberLiteral, Program, SourceNode, StringLiteral};
pub use error::{NodeError, ParseError, ParseErrorKind};
pub use lexer::{Paren, Token, TokenKind};
pub use position::{Location, Position};
pub use serialized::SerializedNode;
pub use visitor::{traverse, Visitor};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Split source text into tokens.
///
/// ## Example
///
/// ```rust
/// use tinyc_parser::{tokenize, Token};
///
/// let tokens = tokenize("(foo)").unwrap();
/// assert_eq!(tokens[1], Token::Name("foo".to_string()));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    lexer::Lexer::new(source).tokenize()
}

/// Parse a token stream into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}

/// Tokenize and parse in one step.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(tokenize(source)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_simple_call() {
        let program = parse_source("(add 2 3)").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.body[0].kind(), NodeKind::CallExpression);
    }

    #[test]
    fn test_parse_source_propagates_lex_error() {
        let err = parse_source("(add 1 #)").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnrecognizedCharacter { character: '#' }));
    }

    #[test]
    fn test_paren_tokens_balance() {
        let tokens = tokenize("(a (b) (c (d 1)))").unwrap();
        let opens = tokens.iter().filter(|t| t.kind() == TokenKind::OpenParen).count();
        let closes = tokens.iter().filter(|t| t.kind() == TokenKind::CloseParen).count();
        assert_eq!(opens, closes);
    }
}
