//! # tinyc Transform
//!
//! Middle and back end of the tinyc compiler: rewrites the source AST into
//! a C-style target AST, then renders that tree as text.
//!
//! ## Architecture
//!
//! ```text
//! source Program → transform (one traverse pass) → target Program → generate → String
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tinyc_transform::{generate, transform};
//!
//! let source = tinyc_parser::parse_source("(add 2 (subtract 4 2))").unwrap();
//! assert_eq!(generate(&transform(&source)), "add(2, subtract(4, 2));");
//! ```

pub mod ast;
pub mod printer;
pub mod serialized;
pub mod transformer;

// Re-export public API
pub use ast::{
    CallExpression, ExpressionStatement, Identifier, NumberLiteral, Program, StringLiteral,
    TargetKind, TargetNode,
};
pub use printer::{generate, generate_node};
pub use transformer::transform;
