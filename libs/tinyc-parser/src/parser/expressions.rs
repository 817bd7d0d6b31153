//! # Expression Parsing
//!
//! Parses the three expression forms: number and string literals, and
//! parenthesized calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! let expr = parser.parse_expression()?;
//! ```

use super::Parser;
use crate::ast::{CallExpression, NumberLiteral, SourceNode, StringLiteral};
use crate::error::ParseError;
use crate::lexer::{Paren, Token, TokenKind};

impl Parser {
    /// Parse one expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// expression = NUMBER | STRING | call
    /// ```
    pub(super) fn parse_expression(&mut self) -> Result<SourceNode, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("expression"));
        };

        match token {
            Token::Number(value) => {
                self.advance();
                Ok(SourceNode::NumberLiteral(NumberLiteral { value }))
            }
            Token::String(value) => {
                self.advance();
                Ok(SourceNode::StringLiteral(StringLiteral { value }))
            }
            Token::Paren(Paren::Open) => self.parse_call_expression().map(SourceNode::CallExpression),
            Token::Paren(Paren::Close) | Token::Name(_) => Err(self.unexpected("expression")),
        }
    }

    /// Parse a call. The current token is the opening paren.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// call = "(" NAME expression* ")"
    /// ```
    fn parse_call_expression(&mut self) -> Result<CallExpression, ParseError> {
        self.advance();

        let name = match self.peek() {
            Some(Token::Name(name)) => name.clone(),
            _ => return Err(self.unexpected("name")),
        };
        self.advance();

        let mut params = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::CloseParen) => {
                    self.advance();
                    break;
                }
                Some(_) => params.push(self.parse_expression()?),
                None => return Err(self.unexpected("')'")),
            }
        }

        tracing::trace!(name = %name, params = params.len(), "parsed call");
        Ok(CallExpression { name, params })
    }
}

// =============================================================================
// TESTS
// =============================================================================
