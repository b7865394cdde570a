//! Vocabulary registries for the shading-language AST and the TSL target.
//!
//! Callers work with **stable IDs** (e.g. `BinaryOperatorId`, `SamplingFnId`) and look up spellings and target
//! names via registry tables, instead of scattering string comparisons across the emitter.
//!
//! ## Examples
//! ```rust
//! use nodeshade_core::lang::operators::{self, BinaryOperatorId};
//!
//! assert_eq!(operators::binary_from_str("*"), Some(BinaryOperatorId::Mul));
//! assert_eq!(operators::binary_info(BinaryOperatorId::Mul).method, "mul");
//! ```

pub mod library;
pub mod literals;
pub mod operators;
pub mod sampling;
