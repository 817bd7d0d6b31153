//! # Compile Errors
//!
//! One error type for the whole pipeline. Every stage's error converts into
//! [`CompileError`] with `?`.

use thiserror::Error;
use tinyc_parser::{NodeError, ParseError};

/// Any failure that aborts a compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A serialized tree could not be converted into an AST.
    #[error("invalid tree: {0}")]
    Node(#[from] NodeError),

    /// A serialized tree was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// Attach the path being read or written to an I/O error.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
