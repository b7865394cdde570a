//! The TSL symbol library.
//!
//! Generated documents import combinators, constructors, and built-in inputs from `three/tsl`. A name is only
//! worth importing when the library actually exports it; this registry is the membership oracle for that check.
//!
//! ## Notes
//! - Lookup via [`is_symbol`] is **case-sensitive** (`Loop` and `loop` are different names).
//! - The table is sorted by name so lookups can binary-search; the guardrail tests enforce the ordering.
//!
//! ## Examples
//! ```rust
//! use nodeshade_core::lang::library::{self, SymbolKind};
//!
//! assert!(library::is_symbol("mix"));
//! assert!(!library::is_symbol("myHelper"));
//! assert_eq!(library::kind_of("Loop"), Some(SymbolKind::ControlFlow));
//! ```

/// What a library symbol is used for in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// `Fn`, `If`, `Loop`, `Switch`, `Break`, …
    ControlFlow,
    /// Type constructors/conversions (`float`, `vec3`, `int`, …).
    Constructor,
    /// Free-function forms of operators (`add`, `lessThan`, `negate`, …).
    Operator,
    /// Math and shading helpers (`mix`, `normalize`, `smoothstep`, …) and constants (`PI`, `EPSILON`).
    Math,
    /// Uniform, varying, texture, and reference constructors.
    Resource,
    /// Built-in shader inputs (`uv`, `positionLocal`, `time`, …).
    Input,
}

/// Metadata for a library symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub name: &'static str,
    pub kind: SymbolKind,
}

const fn sym(name: &'static str, kind: SymbolKind) -> SymbolInfo {
    SymbolInfo { name, kind }
}

use SymbolKind::{Constructor, ControlFlow, Input, Math, Operator, Resource};

/// Registry of every importable `three/tsl` name known to the generator, sorted by name (byte order).
pub const SYMBOLS: &[SymbolInfo] = &[
    sym("Break", ControlFlow),
    sym("Continue", ControlFlow),
    sym("Discard", ControlFlow),
    sym("EPSILON", Math),
    sym("Fn", ControlFlow),
    sym("INFINITY", Math),
    sym("If", ControlFlow),
    sym("Loop", ControlFlow),
    sym("PI", Math),
    sym("PI2", Math),
    sym("Return", ControlFlow),
    sym("Switch", ControlFlow),
    sym("abs", Math),
    sym("acos", Math),
    sym("add", Operator),
    sym("addAssign", Operator),
    sym("all", Math),
    sym("and", Operator),
    sym("any", Math),
    sym("asin", Math),
    sym("assign", Operator),
    sym("atan", Math),
    sym("atan2", Math),
    sym("attribute", Resource),
    sym("bitAnd", Operator),
    sym("bitAndAssign", Operator),
    sym("bitNot", Operator),
    sym("bitOr", Operator),
    sym("bitOrAssign", Operator),
    sym("bitXor", Operator),
    sym("bitXorAssign", Operator),
    sym("bool", Constructor),
    sym("bvec2", Constructor),
    sym("bvec3", Constructor),
    sym("bvec4", Constructor),
    sym("cameraFar", Input),
    sym("cameraNear", Input),
    sym("cameraPosition", Input),
    sym("cameraProjectionMatrix", Input),
    sym("cameraViewMatrix", Input),
    sym("cameraWorldMatrix", Input),
    sym("cbrt", Math),
    sym("ceil", Math),
    sym("clamp", Math),
    sym("color", Constructor),
    sym("cos", Math),
    sym("cross", Math),
    sym("cubeTexture", Resource),
    sym("dFdx", Math),
    sym("dFdy", Math),
    sym("decrement", Operator),
    sym("decrementBefore", Operator),
    sym("degrees", Math),
    sym("deltaTime", Input),
    sym("determinant", Math),
    sym("difference", Math),
    sym("distance", Math),
    sym("div", Operator),
    sym("divAssign", Operator),
    sym("dot", Math),
    sym("equal", Operator),
    sym("exp", Math),
    sym("exp2", Math),
    sym("faceDirection", Input),
    sym("faceForward", Math),
    sym("float", Constructor),
    sym("floor", Math),
    sym("fract", Math),
    sym("frontFacing", Input),
    sym("fwidth", Math),
    sym("greaterThan", Operator),
    sym("greaterThanEqual", Operator),
    sym("increment", Operator),
    sym("incrementBefore", Operator),
    sym("instanceIndex", Input),
    sym("int", Constructor),
    sym("inverse", Math),
    sym("inverseSqrt", Math),
    sym("ivec2", Constructor),
    sym("ivec3", Constructor),
    sym("ivec4", Constructor),
    sym("length", Math),
    sym("lengthSq", Math),
    sym("lessThan", Operator),
    sym("lessThanEqual", Operator),
    sym("log", Math),
    sym("log2", Math),
    sym("mat2", Constructor),
    sym("mat3", Constructor),
    sym("mat4", Constructor),
    sym("max", Math),
    sym("min", Math),
    sym("mix", Math),
    sym("mod", Math),
    sym("modelNormalMatrix", Input),
    sym("modelPosition", Input),
    sym("modelViewMatrix", Input),
    sym("modelWorldMatrix", Input),
    sym("modelWorldMatrixInverse", Input),
    sym("mul", Operator),
    sym("mulAssign", Operator),
    sym("negate", Operator),
    sym("normalGeometry", Input),
    sym("normalLocal", Input),
    sym("normalView", Input),
    sym("normalWorld", Input),
    sym("normalize", Math),
    sym("not", Operator),
    sym("notEqual", Operator),
    sym("oneMinus", Math),
    sym("or", Operator),
    sym("overloadingFn", ControlFlow),
    sym("pointUV", Input),
    sym("positionGeometry", Input),
    sym("positionLocal", Input),
    sym("positionView", Input),
    sym("positionWorld", Input),
    sym("pow", Math),
    sym("radians", Math),
    sym("reciprocal", Math),
    sym("reference", Resource),
    sym("reflect", Math),
    sym("refract", Math),
    sym("remainder", Operator),
    sym("remainderAssign", Operator),
    sym("round", Math),
    sym("saturate", Math),
    sym("screenCoordinate", Input),
    sym("screenSize", Input),
    sym("screenUV", Input),
    sym("select", ControlFlow),
    sym("shiftLeft", Operator),
    sym("shiftLeftAssign", Operator),
    sym("shiftRight", Operator),
    sym("shiftRightAssign", Operator),
    sym("sign", Math),
    sym("sin", Math),
    sym("smoothstep", Math),
    sym("sqrt", Math),
    sym("step", Math),
    sym("sub", Operator),
    sym("subAssign", Operator),
    sym("tan", Math),
    sym("texture", Resource),
    sym("texture3D", Resource),
    sym("textureLoad", Resource),
    sym("textureSize", Resource),
    sym("time", Input),
    sym("transpose", Math),
    sym("trunc", Math),
    sym("uint", Constructor),
    sym("uniform", Resource),
    sym("uv", Input),
    sym("uvec2", Constructor),
    sym("uvec3", Constructor),
    sym("uvec4", Constructor),
    sym("varying", Resource),
    sym("vec2", Constructor),
    sym("vec3", Constructor),
    sym("vec4", Constructor),
    sym("vertexIndex", Input),
    sym("xor", Operator),
];

/// Look up a library symbol by exact name.
pub fn lookup(name: &str) -> Option<&'static SymbolInfo> {
    SYMBOLS
        .binary_search_by(|info| info.name.cmp(name))
        .ok()
        .map(|idx| &SYMBOLS[idx])
}

/// Check whether `name` is exported by the symbol library.
pub fn is_symbol(name: &str) -> bool {
    lookup(name).is_some()
}

/// Return the kind of a library symbol, if it exists.
pub fn kind_of(name: &str) -> Option<SymbolKind> {
    lookup(name).map(|info| info.kind)
}
