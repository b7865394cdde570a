//! Emit TSL (Three.js Shading Language) JavaScript from the shading-language AST.
//!
//! This module defines [`TslEncoder`] and wires together the focused submodules that implement AST → TSL
//! lowering. `mod.rs` holds only the encoder state; the lowering rules live in the submodules.
//!
//! ## Notes
//! - One encoder instance performs one generation. [`TslEncoder::encode`] consumes it, so import/global sets and
//!   indentation never leak between documents.
//! - Emission is infallible. Unsupported nodes become `/* unknown statement */` and are reported through
//!   [`EmitDiagnostic`] on the returned [`Encoded`].
//!
//! ## See also
//! - [`program`]: document assembly (header, imports, wrapper, exports)
//! - [`statements`]: statement bodies and blank-line spacing
//! - [`control_flow`]: `If`, `Loop`, and `Switch` lowering
//! - [`decls`]: variables, uniforms, varyings, and functions
//! - [`expressions`]: expression lowering
//! - [`scope`]: import/global/parameter bookkeeping

mod control_flow;
mod decls;
mod errors;
mod expressions;
mod options;
mod program;
mod scope;
mod statements;

pub use errors::EmitDiagnostic;
pub use options::EncodeOptions;
pub use program::Encoded;

use nodeshade_syntax::Program;

use scope::{OverloadTable, Scope};

/// Text emitted in place of a node the encoder cannot lower.
pub const UNKNOWN_STATEMENT: &str = "/* unknown statement */";

/// Suffix for the immutable input binding of a parameter that the body reassigns.
pub const IMMUTABLE_SUFFIX: &str = "_immutable";

/// Kind of the innermost enclosing block.
///
/// Only the switch-case/loop distinction matters: `Break` is implicit at the end of a TSL case body and dropped
/// there, but must survive inside a loop nested in a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BlockKind {
    #[default]
    Module,
    Function,
    Loop,
    SwitchCase,
}

/// Lower a [`Program`] to a TSL document.
///
/// The public API is [`TslEncoder::encode`] (implemented in `program.rs`); every other lowering helper is
/// implemented on this type across the submodules.
#[derive(Debug)]
pub struct TslEncoder {
    options: EncodeOptions,
    /// Imports, globals, and the parameters of the function being emitted
    scope: Scope,
    /// Top-level functions that share a name
    overloads: OverloadTable,
    /// Current tab depth
    indent: usize,
    block: BlockKind,
    /// Set while lowering the values of a variable declaration
    in_initializer: bool,
    diagnostics: Vec<EmitDiagnostic>,
}

impl TslEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            options,
            scope: Scope::default(),
            overloads: OverloadTable::default(),
            indent: 0,
            block: BlockKind::Module,
            in_initializer: false,
            diagnostics: Vec::new(),
        }
    }

    /// Tabs for the current depth.
    fn tab(&self) -> String {
        "\t".repeat(self.indent)
    }

    /// Record a diagnostic and log it.
    fn report(&mut self, diagnostic: EmitDiagnostic) {
        tracing::warn!(%diagnostic, "tsl emission");
        self.diagnostics.push(diagnostic);
    }

    /// Run `f` with `block` as the innermost block kind, restoring the previous kind afterwards.
    fn in_block<T>(&mut self, block: BlockKind, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.block, block);
        let out = f(self);
        self.block = previous;
        out
    }
}

impl Default for TslEncoder {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

/// Generate the TSL document for `program`, discarding diagnostics.
///
/// ## Examples
/// ```rust
/// use nodeshade::backend::tsl::{EncodeOptions, encode};
/// use nodeshade_syntax::{Program, builders::*};
///
/// let program = Program::new(vec![uniform("float", "intensity")]);
/// let code = encode(&program, &EncodeOptions::new().with_revision("170"));
/// assert_eq!(
///     code,
///     "// Three.js Transpiler r170\n\nimport { uniform } from 'three/tsl';\n\nconst intensity = uniform( 'float' );\n"
/// );
/// ```
pub fn encode(program: &Program, options: &EncodeOptions) -> String {
    TslEncoder::new(options.clone()).encode(program).code
}
