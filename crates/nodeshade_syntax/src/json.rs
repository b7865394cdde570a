//! JSON wire format for programs.
//!
//! Front ends written in other languages hand trees to the generator as JSON. Node objects are internally tagged
//! by `kind`; see [`crate::ast`] for field names.

use thiserror::Error;

use crate::ast::Program;

/// Failure to read or write a JSON program.
#[derive(Debug, Error)]
pub enum AstLoadError {
    #[error("invalid AST JSON at line {line}, column {column}: {source}")]
    Syntax {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize AST: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parse a program from JSON text.
///
/// ## Errors
/// - [`AstLoadError::Syntax`] if the text is not valid JSON or does not match the AST shape. Unrecognized node
///   kinds are **not** an error; they load as [`crate::ast::Node::Unknown`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn from_json(source: &str) -> Result<Program, AstLoadError> {
    serde_json::from_str(source).map_err(|source| AstLoadError::Syntax {
        line: source.line(),
        column: source.column(),
        source,
    })
}

/// Serialize a program to pretty-printed JSON.
pub fn to_json(program: &Program) -> Result<String, AstLoadError> {
    serde_json::to_string_pretty(program).map_err(AstLoadError::Serialize)
}
