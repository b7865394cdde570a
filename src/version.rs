//! nodeshade version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The generated document's header carries the Three.js revision instead
//!   (see [`nodeshade_core::THREE_REVISION`]); this constant is the tool's own version.

/// The nodeshade version string (for example, `0.1.0-alpha.1`).
pub const NODESHADE_VERSION: &str = env!("CARGO_PKG_VERSION");
