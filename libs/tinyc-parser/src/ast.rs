//! # Source AST
//!
//! The tree the parser produces. `Program` is its own type, so it can only
//! ever be the root; everything below it is a [`SourceNode`].
//!
//! ```text
//! (add 2 (subtract 4 2))
//!
//! Program
//! └── CallExpression "add"
//!     ├── NumberLiteral "2"
//!     └── CallExpression "subtract"
//!         ├── NumberLiteral "4"
//!         └── NumberLiteral "2"
//! ```

use std::fmt;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level expressions, in source order.
    pub body: Vec<SourceNode>,
}

impl Program {
    /// Create a program from its top-level expressions.
    pub fn new(body: Vec<SourceNode>) -> Self {
        Self { body }
    }
}

/// Any node below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    /// `(name params...)`
    CallExpression(CallExpression),
    /// Run of digits.
    NumberLiteral(NumberLiteral),
    /// Quoted text.
    StringLiteral(StringLiteral),
}

impl SourceNode {
    /// The node's kind tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NumberLiteral(_) => NodeKind::NumberLiteral,
            Self::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    /// Borrowed view for the traverser.
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::CallExpression(call) => Node::CallExpression(call),
            Self::NumberLiteral(number) => Node::NumberLiteral(number),
            Self::StringLiteral(string) => Node::StringLiteral(string),
        }
    }
}

/// `(name params...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    /// Function name, the first token after `(`.
    pub name: String,
    /// Arguments in source order.
    pub params: Vec<SourceNode>,
}

/// Digits exactly as written; never converted to a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// Digits as written.
    pub value: String,
}

/// String contents without the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Text between the quotes.
    pub value: String,
}

// =============================================================================
// NODE VIEW
// =============================================================================

/// A borrowed reference to any source node, root included.
///
/// This is what visitors see as `node` and `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// The root.
    Program(&'a Program),
    /// A call.
    CallExpression(&'a CallExpression),
    /// A number literal.
    NumberLiteral(&'a NumberLiteral),
    /// A string literal.
    StringLiteral(&'a StringLiteral),
}

impl Node<'_> {
    /// The viewed node's kind tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NumberLiteral(_) => NodeKind::NumberLiteral,
            Self::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }
}

/// Node-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Program`]
    Program,
    /// [`CallExpression`]
    CallExpression,
    /// [`NumberLiteral`]
    NumberLiteral,
    /// [`StringLiteral`]
    StringLiteral,
}

impl NodeKind {
    /// The tag as it appears in serialized trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::CallExpression => "CallExpression",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
