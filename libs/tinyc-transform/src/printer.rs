//! # Code Generator
//!
//! Renders a target AST as C-style call syntax.
//!
//! | Node | Output |
//! |------|--------|
//! | `Program` | each statement, joined by newlines |
//! | `ExpressionStatement` | expression followed by `;` |
//! | `CallExpression` | `callee(arg, arg, ...)` |
//! | `Identifier` | name |
//! | `NumberLiteral` | value verbatim |
//! | `StringLiteral` | value in double quotes, unescaped |

use crate::ast::{CallExpression, Program, TargetNode};
use config::constants::{
    ARGUMENT_SEPARATOR, CLOSE_PAREN, OPEN_PAREN, STATEMENT_SEPARATOR, STATEMENT_TERMINATOR,
    STRING_DELIMITER,
};

/// Render a whole program.
///
/// ## Example
///
/// ```rust
/// use tinyc_transform::{generate, transform};
///
/// let source = tinyc_parser::parse_source("(add 1 2) (add 3 4)").unwrap();
/// assert_eq!(generate(&transform(&source)), "add(1, 2);\nadd(3, 4);");
/// ```
pub fn generate(program: &Program) -> String {
    let output = program
        .body
        .iter()
        .map(generate_node)
        .collect::<Vec<_>>()
        .join(STATEMENT_SEPARATOR);

    tracing::debug!(bytes = output.len(), "generated output");
    output
}

/// Render a single node and everything below it.
pub fn generate_node(node: &TargetNode) -> String {
    match node {
        TargetNode::ExpressionStatement(statement) => {
            format!("{}{STATEMENT_TERMINATOR}", generate_call(&statement.expression))
        }
        TargetNode::CallExpression(call) => generate_call(call),
        TargetNode::Identifier(identifier) => identifier.name.clone(),
        TargetNode::NumberLiteral(number) => number.value.clone(),
        TargetNode::StringLiteral(string) => {
            format!("{STRING_DELIMITER}{}{STRING_DELIMITER}", string.value)
        }
    }
}

fn generate_call(call: &CallExpression) -> String {
    let arguments = call
        .arguments
        .iter()
        .map(generate_node)
        .collect::<Vec<_>>()
        .join(ARGUMENT_SEPARATOR);

    format!("{}{OPEN_PAREN}{arguments}{CLOSE_PAREN}", call.callee.name)
}

// =============================================================================
// TESTS
// =============================================================================
