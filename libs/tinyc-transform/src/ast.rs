//! # Target AST
//!
//! The C-style tree the transformer builds and the generator renders.
//!
//! ```text
//! add(2, subtract(4, 2));
//!
//! Program
//! └── ExpressionStatement
//!     └── CallExpression
//!         ├── callee: Identifier "add"
//!         └── arguments
//!             ├── NumberLiteral "2"
//!             └── CallExpression
//!                 ├── callee: Identifier "subtract"
//!                 └── arguments: NumberLiteral "4", NumberLiteral "2"
//! ```
//!
//! Only calls sitting directly in `Program.body` are wrapped in an
//! `ExpressionStatement`; calls used as arguments never are.

use std::fmt;

/// Root of a target tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Statements, one per line of output.
    pub body: Vec<TargetNode>,
}

impl Program {
    /// Create a program from its statements.
    pub fn new(body: Vec<TargetNode>) -> Self {
        Self { body }
    }
}

/// Any node below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetNode {
    /// `call;`
    ExpressionStatement(ExpressionStatement),
    /// `callee(arguments...)`
    CallExpression(CallExpression),
    /// A bare name.
    Identifier(Identifier),
    /// Digits, rendered verbatim.
    NumberLiteral(NumberLiteral),
    /// Text, rendered in double quotes.
    StringLiteral(StringLiteral),
}

impl TargetNode {
    /// The node's kind tag.
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::ExpressionStatement(_) => TargetKind::ExpressionStatement,
            Self::CallExpression(_) => TargetKind::CallExpression,
            Self::Identifier(_) => TargetKind::Identifier,
            Self::NumberLiteral(_) => TargetKind::NumberLiteral,
            Self::StringLiteral(_) => TargetKind::StringLiteral,
        }
    }
}

/// A top-level call used as a statement.
///
/// Only calls are ever wrapped, so the wrapped expression is typed as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The wrapped call.
    pub expression: CallExpression,
}

/// `callee(arguments...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    /// Name of the called function.
    pub callee: Identifier,
    /// Arguments in source order. Calls here are never wrapped.
    pub arguments: Vec<TargetNode>,
}

/// A function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The name as written in the source call.
    pub name: String,
}

/// Digits carried over unchanged from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// Digits as written.
    pub value: String,
}

/// String contents carried over unchanged from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Text without quotes.
    pub value: String,
}

/// Node-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// [`Program`]
    Program,
    /// [`ExpressionStatement`]
    ExpressionStatement,
    /// [`CallExpression`]
    CallExpression,
    /// [`Identifier`]
    Identifier,
    /// [`NumberLiteral`]
    NumberLiteral,
    /// [`StringLiteral`]
    StringLiteral,
}

impl TargetKind {
    /// The tag as it appears in serialized trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::CallExpression => "CallExpression",
            Self::Identifier => "Identifier",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
