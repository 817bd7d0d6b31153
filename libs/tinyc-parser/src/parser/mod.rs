//! # tinyc Parser
//!
//! Recursive descent parser for tinyc.
//! Produces the source AST ([`Program`]).
//!
//! ## Grammar
//!
//! ```text
//! program    = expression*
//! expression = NUMBER | STRING | "(" NAME expression* ")"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tinyc_parser::lexer::Lexer;
//! use tinyc_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 2 3)").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod expressions;

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for tinyc.
///
/// One token of lookahead, no backtracking and no error recovery: the
/// first error ends the parse.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser over the lexer's tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the entire token stream into a program.
    ///
    /// ## Returns
    ///
    /// The program, or the first parse error. On success every token has
    /// been consumed exactly once.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }

        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Get current token kind.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(Token::kind)
    }

    /// Check if every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advance to next token.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// Error for the current token, or end of input if there is none.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected_token(token.kind(), expected, self.current),
            None => ParseError::unexpected_eof(expected, self.current),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
