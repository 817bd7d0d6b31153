//! # Transformer
//!
//! Builds the target AST from a source AST in one [`traverse`] pass.
//!
//! The visitor's context is the `Vec<TargetNode>` the current node belongs
//! in, starting at the new program's `body`. Literals push their target node
//! as they are entered. A call's params each push one node onto the same
//! collection, so on exit the call takes that many trailing nodes as its
//! `arguments` and pushes itself in their place.
//!
//! ```text
//! (add 2 (subtract 4 2))
//!
//! enter add        body = []
//!   2              body = [2]
//!   enter subtract
//!     4, 2         body = [2, 4, 2]
//!   exit subtract  body = [2, subtract(4, 2)]
//! exit add         body = [ExpressionStatement(add(2, subtract(4, 2)))]
//! ```

use crate::ast::{
    CallExpression, ExpressionStatement, Identifier, NumberLiteral, Program, StringLiteral,
    TargetNode,
};
use std::convert::Infallible;
use tinyc_parser::ast as source;
use tinyc_parser::{traverse, Node, Visitor};

/// Transform a source program into a target program.
///
/// ## Example
///
/// ```rust
/// use tinyc_transform::{ast::TargetNode, transform};
///
/// let source = tinyc_parser::parse_source("(add 2 3)").unwrap();
/// let target = transform(&source);
/// assert!(matches!(target.body[0], TargetNode::ExpressionStatement(_)));
/// ```
pub fn transform(program: &source::Program) -> Program {
    let mut body = Vec::new();

    match traverse(program, &mut Transformer, &mut body) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    tracing::debug!(statements = body.len(), "transformed program");
    Program::new(body)
}

/// Visitor emitting one target node per source node.
struct Transformer;

impl Visitor for Transformer {
    type Context = Vec<TargetNode>;
    type Error = Infallible;

    fn exit_call_expression(
        &mut self,
        call: &source::CallExpression,
        parent: Node<'_>,
        siblings: &mut Vec<TargetNode>,
    ) -> Result<(), Infallible> {
        // Each param pushed exactly one node since this call was entered.
        let start = siblings.len().saturating_sub(call.params.len());
        let expression = CallExpression {
            callee: Identifier {
                name: call.name.clone(),
            },
            arguments: siblings.split_off(start),
        };

        // Calls used as arguments stay bare.
        siblings.push(match parent {
            Node::CallExpression(_) => TargetNode::CallExpression(expression),
            _ => TargetNode::ExpressionStatement(ExpressionStatement { expression }),
        });
        Ok(())
    }

    fn enter_number_literal(
        &mut self,
        number: &source::NumberLiteral,
        _parent: Node<'_>,
        siblings: &mut Vec<TargetNode>,
    ) -> Result<(), Infallible> {
        siblings.push(TargetNode::NumberLiteral(NumberLiteral {
            value: number.value.clone(),
        }));
        Ok(())
    }

    fn enter_string_literal(
        &mut self,
        string: &source::StringLiteral,
        _parent: Node<'_>,
        siblings: &mut Vec<TargetNode>,
    ) -> Result<(), Infallible> {
        siblings.push(TargetNode::StringLiteral(StringLiteral {
            value: string.value.clone(),
        }));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
