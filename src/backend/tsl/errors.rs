//! Diagnostics raised while lowering to TSL.
//!
//! Nothing here aborts generation. Each diagnostic marks a spot where the emitter substituted a placeholder or
//! made a best-effort choice; they are collected on [`super::Encoded`] and logged as warnings.

use miette::Diagnostic;
use thiserror::Error;

/// A non-fatal problem found during emission.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitDiagnostic {
    #[error("unrecognized node kind; emitted `/* unknown statement */`")]
    #[diagnostic(
        code(nodeshade::emit::unknown_node),
        severity(Warning),
        help("the front end produced a node kind the TSL emitter does not lower")
    )]
    UnknownNode,

    #[error("function `{name}` is declared inside a body; emitted `/* unknown statement */`")]
    #[diagnostic(
        code(nodeshade::emit::nested_function),
        severity(Warning),
        help("move the function to module scope")
    )]
    NestedFunction { name: String },

    #[error("switch case group [{}] has no body and no following case", .conditions.join(", "))]
    #[diagnostic(
        code(nodeshade::emit::unterminated_case_group),
        severity(Warning),
        help("every run of empty cases must end in a case with a body or in `default`")
    )]
    UnterminatedCaseGroup { conditions: Vec<String> },
}
