//! Provide the canonical vocabulary shared by the nodeshade AST and the TSL emitter.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed tables the generator consults while
//! lowering: operator spellings and their target combinator names, the symbol library exported by `three/tsl`,
//! the resource-sampling call names, and numeric literal kinds.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Lookups are case-sensitive everywhere.

pub mod lang;

/// Three.js revision printed in the provenance header of generated documents.
pub const THREE_REVISION: &str = "170";

/// Module specifier the generated import statement reads from.
pub const TSL_MODULE: &str = "three/tsl";
