//! # tinyc Compiler
//!
//! Compiles Lisp-style calls into C-style calls.
//!
//! ```text
//! (add 2 (subtract 4 2))   →   add(2, subtract(4, 2));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → tokenize → parse → transform → generate → Output Text
//!               └──── tinyc-parser ────┘ └─── tinyc-transform ───┘
//! ```
//!
//! Every stage is re-exported here so callers can stop at any point in the
//! pipeline. The first error from any stage aborts the compilation.
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(
//!     tinyc_compiler::compile("(add 1 2) (add 3 4)").unwrap(),
//!     "add(1, 2);\nadd(3, 4);"
//! );
//! ```

pub mod error;

pub use error::CompileError;
pub use tinyc_parser::{parse, tokenize, traverse, Visitor};
pub use tinyc_transform::{generate, transform};

/// Compile source text to output text.
///
/// ## Errors
///
/// The first lexing or parsing error. Transformation and generation cannot
/// fail on a parsed program.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let span = tracing::info_span!("compile", bytes = source.len());
    let _enter = span.enter();

    let program = parse(tokenize(source)?)?;
    Ok(generate(&transform(&program)))
}

/// Render a target tree read from JSON in the serialized node shape.
///
/// ## Errors
///
/// `Json` if the text is not a JSON object, `Node` if the object is not a
/// well-formed target tree.
pub fn generate_json(json: &str) -> Result<String, CompileError> {
    let root: tinyc_parser::SerializedNode = serde_json::from_str(json)?;
    let program = tinyc_transform::serialized::program_from_serialized(&root)?;
    Ok(generate(&program))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_parser::{NodeError, ParseErrorKind};

    #[test]
    fn test_compile_simple() {
        assert_eq!(compile("(add 2 3)").unwrap(), "add(2, 3);");
    }

    #[test]
    fn test_compile_empty() {
        assert_eq!(compile("   \n").unwrap(), "");
    }

    #[test]
    fn test_compile_unrecognized_character() {
        let err = compile("(add 2 $)").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ref e)
                if e.kind == ParseErrorKind::UnrecognizedCharacter { character: '$' }
        ));
    }

    #[test]
    fn test_generate_json() {
        let json = r#"{"type":"Program","body":[{"type":"ExpressionStatement","expression":
            {"type":"CallExpression","callee":{"type":"Identifier","name":"f"},"arguments":[]}}]}"#;
        assert_eq!(generate_json(json).unwrap(), "f();");
    }

    #[test]
    fn test_generate_json_unknown_node() {
        let err = generate_json(r#"{"type":"Program","body":[{"type":"Lambda"}]}"#).unwrap_err();
        assert!(matches!(err, CompileError::Node(NodeError::UnknownNodeType { .. })));
    }

    #[test]
    fn test_generate_json_malformed() {
        let err = generate_json("{ not json").unwrap_err();
        assert!(matches!(err, CompileError::Json(_)));
    }

    #[test]
    fn test_generate_json_rejects_unwrapped_top_level_call() {
        let json = r#"{"type":"Program","body":[{"type":"CallExpression",
            "callee":{"type":"Identifier","name":"f"},"arguments":[]}]}"#;
        let err = generate_json(json).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Node(NodeError::MisplacedNode { context: "a top-level statement", .. })
        ));
    }

    #[test]
    fn test_generate_json_rejects_statement_argument() {
        let json = r#"{"type":"Program","body":[{"type":"ExpressionStatement","expression":
            {"type":"CallExpression","callee":{"type":"Identifier","name":"f"},"arguments":[
                {"type":"ExpressionStatement","expression":{"type":"CallExpression",
                    "callee":{"type":"Identifier","name":"g"},"arguments":[]}}]}}]}"#;
        let err = generate_json(json).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Node(NodeError::MisplacedNode { context: "an argument", .. })
        ));
    }
}
