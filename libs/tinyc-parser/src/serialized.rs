//! # Serialized Trees
//!
//! JSON interchange for ASTs, as plain `{ "type": ..., ... }` objects:
//!
//! ```json
//! { "type": "Program", "body": [
//!   { "type": "CallExpression", "name": "add", "params": [
//!     { "type": "NumberLiteral", "value": "2" } ] } ] }
//! ```
//!
//! [`SerializedNode`] is one struct with every field optional, so any tree
//! deserializes. Converting it into a typed AST is a
//! closed dispatch on `type`; that is the only place an unknown node type
//! can show up.
//!
//! ## Usage
//!
//! ```rust
//! use tinyc_parser::serialized::{program_from_serialized, SerializedNode};
//!
//! let json = r#"{"type":"Program","body":[{"type":"NumberLiteral","value":"7"}]}"#;
//! let node: SerializedNode = serde_json::from_str(json).unwrap();
//! let program = program_from_serialized(&node).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

use crate::ast::{CallExpression, NodeKind, NumberLiteral, Program, SourceNode, StringLiteral};
use crate::error::NodeError;
use serde::{Deserialize, Serialize};

/// A tree node of any kind, source or target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerializedNode {
    /// Node kind tag (e.g. "Program", "CallExpression").
    #[serde(rename = "type")]
    pub node_type: String,

    /// Source call name or target identifier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Literal text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Program statements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<SerializedNode>>,

    /// Source call parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<SerializedNode>>,

    /// Target call callee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee: Option<Box<SerializedNode>>,

    /// Target call arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<SerializedNode>>,

    /// Target statement expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<SerializedNode>>,
}

impl SerializedNode {
    /// A node with only its tag set.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Required string field, or `MissingField`.
    pub fn require_str<'a>(
        &self,
        field: &'static str,
        value: &'a Option<String>,
    ) -> Result<&'a str, NodeError> {
        value.as_deref().ok_or_else(|| self.missing(field))
    }

    /// Required list field, or `MissingField`.
    pub fn require_list<'a>(
        &self,
        field: &'static str,
        list: &'a Option<Vec<SerializedNode>>,
    ) -> Result<&'a [SerializedNode], NodeError> {
        list.as_deref().ok_or_else(|| self.missing(field))
    }

    /// Required child node, or `MissingField`.
    pub fn require_node<'a>(
        &self,
        field: &'static str,
        node: &'a Option<Box<SerializedNode>>,
    ) -> Result<&'a SerializedNode, NodeError> {
        node.as_deref().ok_or_else(|| self.missing(field))
    }

    fn missing(&self, field: &'static str) -> NodeError {
        NodeError::MissingField {
            node_type: self.node_type.clone(),
            field,
        }
    }

    /// `MisplacedNode` for this node.
    pub fn misplaced(&self, context: &'static str) -> NodeError {
        NodeError::MisplacedNode {
            node_type: self.node_type.clone(),
            context,
        }
    }

    /// `UnknownNodeType` for this node.
    pub fn unknown(&self) -> NodeError {
        NodeError::UnknownNodeType {
            node_type: self.node_type.clone(),
        }
    }
}

// =============================================================================
// SOURCE AST -> SERIALIZED
// =============================================================================

/// Serialize a source program.
pub fn to_serialized(program: &Program) -> SerializedNode {
    SerializedNode {
        body: Some(program.body.iter().map(node_to_serialized).collect()),
        ..SerializedNode::new(NodeKind::Program.as_str())
    }
}

fn node_to_serialized(node: &SourceNode) -> SerializedNode {
    match node {
        SourceNode::CallExpression(call) => SerializedNode {
            name: Some(call.name.clone()),
            params: Some(call.params.iter().map(node_to_serialized).collect()),
            ..SerializedNode::new(NodeKind::CallExpression.as_str())
        },
        SourceNode::NumberLiteral(number) => SerializedNode {
            value: Some(number.value.clone()),
            ..SerializedNode::new(NodeKind::NumberLiteral.as_str())
        },
        SourceNode::StringLiteral(string) => SerializedNode {
            value: Some(string.value.clone()),
            ..SerializedNode::new(NodeKind::StringLiteral.as_str())
        },
    }
}

// =============================================================================
// SERIALIZED -> SOURCE AST
// =============================================================================

/// Rebuild a source program from its serialized form.
///
/// ## Errors
///
/// - `UnknownNodeType` for a tag that is not a source node kind
/// - `MisplacedNode` for a `Program` anywhere but the root, or a non-`Program` root
/// - `MissingField` for a node without a field its kind requires
pub fn program_from_serialized(root: &SerializedNode) -> Result<Program, NodeError> {
    match root.node_type.as_str() {
        "Program" => {
            let body = root.require_list("body", &root.body)?;
            let body = body.iter().map(node_from_serialized).collect::<Result<_, _>>()?;
            Ok(Program::new(body))
        }
        "CallExpression" | "NumberLiteral" | "StringLiteral" => Err(root.misplaced("the root")),
        _ => Err(root.unknown()),
    }
}

fn node_from_serialized(node: &SerializedNode) -> Result<SourceNode, NodeError> {
    match node.node_type.as_str() {
        "CallExpression" => {
            let name = node.require_str("name", &node.name)?;
            let params = node.require_list("params", &node.params)?;
            Ok(SourceNode::CallExpression(CallExpression {
                name: name.to_string(),
                params: params.iter().map(node_from_serialized).collect::<Result<_, _>>()?,
            }))
        }
        "NumberLiteral" => Ok(SourceNode::NumberLiteral(NumberLiteral {
            value: node.require_str("value", &node.value)?.to_string(),
        })),
        "StringLiteral" => Ok(SourceNode::StringLiteral(StringLiteral {
            value: node.require_str("value", &node.value)?.to_string(),
        })),
        "Program" => Err(node.misplaced("a child node")),
        _ => Err(node.unknown()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    fn from_json(json: &str) -> Result<Program, NodeError> {
        let node: SerializedNode = serde_json::from_str(json).unwrap();
        program_from_serialized(&node)
    }

    #[test]
    fn test_serialized_shape() {
        let program = parse_source("(add 2 \"x\")").unwrap();
        let json = serde_json::to_value(to_serialized(&program)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "Program",
                "body": [{
                    "type": "CallExpression",
                    "name": "add",
                    "params": [
                        { "type": "NumberLiteral", "value": "2" },
                        { "type": "StringLiteral", "value": "x" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_serialized_conversion_is_lossless() {
        let program = parse_source("(a (b 1 \"two\") (c)) 3").unwrap();
        let restored = program_from_serialized(&to_serialized(&program)).unwrap();
        assert_eq!(restored, program);
    }

    #[test]
    fn test_unknown_node_type() {
        let err = from_json(r#"{"type":"Program","body":[{"type":"Lambda","value":"x"}]}"#)
            .unwrap_err();
        assert_eq!(err, NodeError::UnknownNodeType { node_type: "Lambda".to_string() });
    }

    #[test]
    fn test_unknown_root_type() {
        let err = from_json(r#"{"type":"Module","body":[]}"#).unwrap_err();
        assert!(matches!(err, NodeError::UnknownNodeType { .. }));
    }

    #[test]
    fn test_nested_program_is_misplaced() {
        let err = from_json(
            r#"{"type":"Program","body":[{"type":"CallExpression","name":"f","params":[{"type":"Program","body":[]}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, NodeError::MisplacedNode { .. }));
    }

    #[test]
    fn test_literal_root_is_misplaced() {
        let err = from_json(r#"{"type":"NumberLiteral","value":"1"}"#).unwrap_err();
        assert_eq!(
            err,
            NodeError::MisplacedNode { node_type: "NumberLiteral".to_string(), context: "the root" }
        );
    }

    #[test]
    fn test_missing_field() {
        let err = from_json(r#"{"type":"Program","body":[{"type":"CallExpression","params":[]}]}"#)
            .unwrap_err();
        assert_eq!(
            err,
            NodeError::MissingField { node_type: "CallExpression".to_string(), field: "name" }
        );
    }
}
