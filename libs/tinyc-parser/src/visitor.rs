//! # Traversal
//!
//! Depth-first walk over a source [`Program`], calling a [`Visitor`]'s
//! `enter_*` hook before a node's children and its `exit_*` hook after them.
//!
//! Each visitor carries a `Context`: a caller-owned accumulator handed down
//! the walk as an explicit `&mut` handle. `enter_program` and
//! `enter_call_expression` return the handle their children should use,
//! which is how a single walk can build a differently-shaped tree.
//!
//! ```text
//! enter Program
//!   enter CallExpression add
//!     enter NumberLiteral 2 / exit NumberLiteral 2
//!     enter CallExpression subtract
//!       ...
//!     exit CallExpression subtract
//!   exit CallExpression add
//! exit Program
//! ```
//!
//! Sibling subtrees are visited strictly left to right and never interleave.

use crate::ast::{CallExpression, Node, NumberLiteral, Program, SourceNode, StringLiteral};

/// Per-node-kind hooks. Every hook defaults to doing nothing.
///
/// The root has no parent; every other hook receives the node it hangs off.
pub trait Visitor {
    /// Accumulator threaded through the walk.
    type Context;
    /// Error that aborts the walk.
    type Error;

    fn enter_program<'c>(
        &mut self,
        _program: &Program,
        context: &'c mut Self::Context,
    ) -> Result<&'c mut Self::Context, Self::Error> {
        Ok(context)
    }

    fn exit_program(
        &mut self,
        _program: &Program,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_call_expression<'c>(
        &mut self,
        _call: &CallExpression,
        _parent: Node<'_>,
        context: &'c mut Self::Context,
    ) -> Result<&'c mut Self::Context, Self::Error> {
        Ok(context)
    }

    fn exit_call_expression(
        &mut self,
        _call: &CallExpression,
        _parent: Node<'_>,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_number_literal(
        &mut self,
        _number: &NumberLiteral,
        _parent: Node<'_>,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_number_literal(
        &mut self,
        _number: &NumberLiteral,
        _parent: Node<'_>,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_string_literal(
        &mut self,
        _string: &StringLiteral,
        _parent: Node<'_>,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_string_literal(
        &mut self,
        _string: &StringLiteral,
        _parent: Node<'_>,
        _context: &mut Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk `program`, starting from `context`.
///
/// The first error returned by a hook stops the walk and is returned as is.
///
/// ## Example
///
/// ```rust
/// use tinyc_parser::ast::{CallExpression, Node};
/// use tinyc_parser::visitor::{traverse, Visitor};
///
/// struct CallNames;
///
/// impl Visitor for CallNames {
///     type Context = Vec<String>;
///     type Error = std::convert::Infallible;
///
///     fn enter_call_expression<'c>(
///         &mut self,
///         call: &CallExpression,
///         _parent: Node<'_>,
///         names: &'c mut Vec<String>,
///     ) -> Result<&'c mut Vec<String>, Self::Error> {
///         names.push(call.name.clone());
///         Ok(names)
///     }
/// }
///
/// let program = tinyc_parser::parse_source("(add 1 (sub 2 3))").unwrap();
/// let mut names = Vec::new();
/// traverse(&program, &mut CallNames, &mut names).unwrap();
/// assert_eq!(names, ["add", "sub"]);
/// ```
pub fn traverse<V: Visitor>(
    program: &Program,
    visitor: &mut V,
    context: &mut V::Context,
) -> Result<(), V::Error> {
    let body_context = visitor.enter_program(program, context)?;
    traverse_nodes(&program.body, Node::Program(program), visitor, body_context)?;
    visitor.exit_program(program, context)
}

fn traverse_nodes<V: Visitor>(
    nodes: &[SourceNode],
    parent: Node<'_>,
    visitor: &mut V,
    context: &mut V::Context,
) -> Result<(), V::Error> {
    for node in nodes {
        traverse_node(node, parent, visitor, context)?;
    }
    Ok(())
}

fn traverse_node<V: Visitor>(
    node: &SourceNode,
    parent: Node<'_>,
    visitor: &mut V,
    context: &mut V::Context,
) -> Result<(), V::Error> {
    tracing::trace!(kind = %node.kind(), parent = %parent.kind(), "visit");

    match node {
        SourceNode::CallExpression(call) => {
            let params_context = visitor.enter_call_expression(call, parent, context)?;
            traverse_nodes(&call.params, Node::CallExpression(call), visitor, params_context)?;
            visitor.exit_call_expression(call, parent, context)
        }
        SourceNode::NumberLiteral(number) => {
            visitor.enter_number_literal(number, parent, context)?;
            visitor.exit_number_literal(number, parent, context)
        }
        SourceNode::StringLiteral(string) => {
            visitor.enter_string_literal(string, parent, context)?;
            visitor.exit_string_literal(string, parent, context)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
