//! Shading-language syntax tree for the nodeshade generator: AST types, builders, and the JSON wire format.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not parse shader text, resolve names, or type check. Trees
//!   come from an external front end, already validated.
//! - Operator identity comes from `nodeshade_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use nodeshade_syntax::json;
//!
//! let program = json::from_json(r#"{ "body": [ { "kind": "Break" } ] }"#).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod ast;
pub mod builders;
pub mod json;

pub use ast::{Node, Program};
