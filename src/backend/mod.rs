//! nodeshade backend
//!
//! Code generation from the shading-language AST to target source text.
//!
//! ## Module Organization
//!
//! - `tsl/` - TSL (Three.js Shading Language) JavaScript emission
//!   - `mod.rs` - [`TslEncoder`] state and entry point
//!   - `program.rs` - Document assembly
//!   - `statements.rs` - Statement bodies and spacing
//!   - `control_flow.rs` - `If` / `Loop` / `Switch`
//!   - `decls.rs` - Variables, uniforms, varyings, functions
//!   - `expressions/` - Operators, calls, accessor chains
//!   - `scope.rs` - Import/global/parameter tracking

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod tsl;

pub use tsl::{EncodeOptions, Encoded, TslEncoder};
