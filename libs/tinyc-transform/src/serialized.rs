//! # Serialized Target Trees
//!
//! Converts target ASTs to and from [`SerializedNode`], the JSON object shape
//! shared with the parser crate:
//!
//! ```json
//! { "type": "ExpressionStatement", "expression": {
//!   "type": "CallExpression",
//!   "callee": { "type": "Identifier", "name": "add" },
//!   "arguments": [ { "type": "NumberLiteral", "value": "2" } ] } }
//! ```
//!
//! Reading a tree back is where malformed input is caught: an unknown
//! `type`, a node kind in a slot that cannot hold it, or a missing field.

use crate::ast::{
    CallExpression, ExpressionStatement, Identifier, NumberLiteral, Program, StringLiteral,
    TargetKind, TargetNode,
};
use tinyc_parser::{NodeError, SerializedNode};

/// Every tag a target tree may contain.
const TARGET_KINDS: [TargetKind; 6] = [
    TargetKind::Program,
    TargetKind::ExpressionStatement,
    TargetKind::CallExpression,
    TargetKind::Identifier,
    TargetKind::NumberLiteral,
    TargetKind::StringLiteral,
];

fn is_target_kind(node_type: &str) -> bool {
    TARGET_KINDS.iter().any(|kind| kind.as_str() == node_type)
}

/// `MisplacedNode` for a known tag, `UnknownNodeType` otherwise.
fn reject(node: &SerializedNode, context: &'static str) -> NodeError {
    if is_target_kind(&node.node_type) {
        node.misplaced(context)
    } else {
        node.unknown()
    }
}

// =============================================================================
// TARGET AST -> SERIALIZED
// =============================================================================

/// Serialize a target program.
pub fn to_serialized(program: &Program) -> SerializedNode {
    SerializedNode {
        body: Some(program.body.iter().map(node_to_serialized).collect()),
        ..SerializedNode::new(TargetKind::Program.as_str())
    }
}

fn node_to_serialized(node: &TargetNode) -> SerializedNode {
    match node {
        TargetNode::ExpressionStatement(statement) => SerializedNode {
            expression: Some(Box::new(call_to_serialized(&statement.expression))),
            ..SerializedNode::new(TargetKind::ExpressionStatement.as_str())
        },
        TargetNode::CallExpression(call) => call_to_serialized(call),
        TargetNode::Identifier(identifier) => identifier_to_serialized(identifier),
        TargetNode::NumberLiteral(number) => SerializedNode {
            value: Some(number.value.clone()),
            ..SerializedNode::new(TargetKind::NumberLiteral.as_str())
        },
        TargetNode::StringLiteral(string) => SerializedNode {
            value: Some(string.value.clone()),
            ..SerializedNode::new(TargetKind::StringLiteral.as_str())
        },
    }
}

fn call_to_serialized(call: &CallExpression) -> SerializedNode {
    SerializedNode {
        callee: Some(Box::new(identifier_to_serialized(&call.callee))),
        arguments: Some(call.arguments.iter().map(node_to_serialized).collect()),
        ..SerializedNode::new(TargetKind::CallExpression.as_str())
    }
}

fn identifier_to_serialized(identifier: &Identifier) -> SerializedNode {
    SerializedNode {
        name: Some(identifier.name.clone()),
        ..SerializedNode::new(TargetKind::Identifier.as_str())
    }
}

// =============================================================================
// SERIALIZED -> TARGET AST
// =============================================================================

/// Rebuild a target program from its serialized form.
///
/// ## Errors
///
/// - `UnknownNodeType` for a tag that is not a target node kind
/// - `MisplacedNode` for a known kind where it cannot appear: a non-`Program`
///   root, a nested `Program`, a bare call at the top level, a statement used
///   as an argument, a statement wrapping anything but a call, or a callee
///   that is not an `Identifier`
/// - `MissingField` for a node without a field its kind requires
pub fn program_from_serialized(root: &SerializedNode) -> Result<Program, NodeError> {
    if root.node_type != TargetKind::Program.as_str() {
        return Err(reject(root, "the root"));
    }

    let body = root.require_list("body", &root.body)?;
    let body = body.iter().map(statement_from_serialized).collect::<Result<_, _>>()?;
    Ok(Program::new(body))
}

/// An element of `Program.body`. Calls here must be wrapped in a statement.
fn statement_from_serialized(node: &SerializedNode) -> Result<TargetNode, NodeError> {
    match node.node_type.as_str() {
        "ExpressionStatement" => {
            let expression = node.require_node("expression", &node.expression)?;
            Ok(TargetNode::ExpressionStatement(ExpressionStatement {
                expression: call_from_serialized(expression, "an expression statement")?,
            }))
        }
        "CallExpression" => Err(node.misplaced("a top-level statement")),
        _ => leaf_from_serialized(node),
    }
}

/// An element of a call's `arguments`. Calls here are never wrapped.
fn argument_from_serialized(node: &SerializedNode) -> Result<TargetNode, NodeError> {
    match node.node_type.as_str() {
        "CallExpression" => Ok(TargetNode::CallExpression(call_from_serialized(node, "an argument")?)),
        "ExpressionStatement" => Err(node.misplaced("an argument")),
        _ => leaf_from_serialized(node),
    }
}

/// Identifiers and literals, which may sit in either slot.
fn leaf_from_serialized(node: &SerializedNode) -> Result<TargetNode, NodeError> {
    match node.node_type.as_str() {
        "Identifier" => Ok(TargetNode::Identifier(identifier_from_serialized(node, "a child node")?)),
        "NumberLiteral" => Ok(TargetNode::NumberLiteral(NumberLiteral {
            value: node.require_str("value", &node.value)?.to_string(),
        })),
        "StringLiteral" => Ok(TargetNode::StringLiteral(StringLiteral {
            value: node.require_str("value", &node.value)?.to_string(),
        })),
        _ => Err(reject(node, "a child node")),
    }
}

/// A node that must be a call. `context` names the slot for errors.
fn call_from_serialized(
    node: &SerializedNode,
    context: &'static str,
) -> Result<CallExpression, NodeError> {
    if node.node_type != TargetKind::CallExpression.as_str() {
        return Err(reject(node, context));
    }

    let callee = node.require_node("callee", &node.callee)?;
    let arguments = node.require_list("arguments", &node.arguments)?;

    Ok(CallExpression {
        callee: identifier_from_serialized(callee, "a callee")?,
        arguments: arguments.iter().map(argument_from_serialized).collect::<Result<_, _>>()?,
    })
}

/// A node that must be an identifier. `context` names the slot for errors.
fn identifier_from_serialized(
    node: &SerializedNode,
    context: &'static str,
) -> Result<Identifier, NodeError> {
    if node.node_type != TargetKind::Identifier.as_str() {
        return Err(reject(node, context));
    }

    Ok(Identifier {
        name: node.require_str("name", &node.name)?.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
