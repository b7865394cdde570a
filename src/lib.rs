#![forbid(unsafe_code)]
//! nodeshade: shading-language AST to TSL code generator
//!
//! An external front end parses GLSL-like shader source into the AST defined in [`nodeshade_syntax`]. This crate
//! lowers that tree to TSL (Three.js Shading Language) JavaScript: a module that imports its combinators from
//! `three/tsl`, or a closure that receives them.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.
//!
//! ## Examples
//! ```rust
//! use nodeshade::{EncodeOptions, TslEncoder};
//! use nodeshade::ast::{Program, builders::*};
//!
//! let program = Program::new(vec![function(
//!     "addOne",
//!     "float",
//!     vec![param("float", "x")],
//!     vec![ret(Some(binary("+", accessor("x"), number("1"))))],
//! )]);
//!
//! let encoded = TslEncoder::new(EncodeOptions::default()).encode(&program);
//! assert!(encoded.code.contains("import { Fn } from 'three/tsl';"));
//! assert!(encoded.diagnostics.is_empty());
//! ```

pub mod backend;
pub mod cli;
pub mod version;

pub use nodeshade_syntax as ast;

pub use backend::tsl::{EmitDiagnostic, EncodeOptions, Encoded, TslEncoder, encode};
