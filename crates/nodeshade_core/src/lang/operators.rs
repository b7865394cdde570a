//! Operator vocabulary.
//!
//! This module defines the source operator set of the shading language together with the name of the TSL
//! combinator (method or free function) each operator lowers to.
//!
//! ## Notes
//! - Lookup via [`binary_from_str`] / [`unary_from_str`] is **case-sensitive**.
//! - `+` and `-` appear in both tables; the caller decides arity from the AST shape.
//! - Member access (`.`) is a binary operator whose "method" is the joiner itself; the emitter concatenates the
//!   operands instead of emitting a call.
//!
//! ## Examples
//! ```rust
//! use nodeshade_core::lang::operators::{self, BinaryOperatorId, UnaryOperatorId};
//!
//! assert_eq!(operators::binary_from_str("%"), Some(BinaryOperatorId::Remainder));
//! assert_eq!(operators::binary_info(BinaryOperatorId::Remainder).method, "remainder");
//! assert_eq!(operators::unary_info(UnaryOperatorId::Negate).method, Some("negate"));
//! ```

/// Coarse grouping of binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Assignment,
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
    Shift,
    CompoundAssignment,
    Member,
}

/// Stable identifier for every binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperatorId {
    Assign,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Remainder,

    // Comparison
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Equal,
    NotEqual,

    // Logical
    And,
    Or,
    Xor,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,

    // Shift
    ShiftLeft,
    ShiftRight,

    // Compound assignment
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemainderAssign,
    BitXorAssign,
    BitAndAssign,
    BitOrAssign,
    ShiftLeftAssign,
    ShiftRightAssign,

    Member,
}

/// Metadata for a binary operator.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperatorInfo {
    pub id: BinaryOperatorId,
    /// Source spelling (e.g. `"+="`).
    pub spelling: &'static str,
    /// Target combinator/method name (e.g. `"addAssign"`).
    pub method: &'static str,
    pub category: OperatorCategory,
}

const fn bin(
    id: BinaryOperatorId,
    spelling: &'static str,
    method: &'static str,
    category: OperatorCategory,
) -> BinaryOperatorInfo {
    BinaryOperatorInfo {
        id,
        spelling,
        method,
        category,
    }
}

/// Registry of all binary operators.
pub const BINARY_OPERATORS: &[BinaryOperatorInfo] = &[
    bin(BinaryOperatorId::Assign, "=", "assign", OperatorCategory::Assignment),
    bin(BinaryOperatorId::Add, "+", "add", OperatorCategory::Arithmetic),
    bin(BinaryOperatorId::Sub, "-", "sub", OperatorCategory::Arithmetic),
    bin(BinaryOperatorId::Mul, "*", "mul", OperatorCategory::Arithmetic),
    bin(BinaryOperatorId::Div, "/", "div", OperatorCategory::Arithmetic),
    bin(BinaryOperatorId::Remainder, "%", "remainder", OperatorCategory::Arithmetic),
    bin(BinaryOperatorId::LessThan, "<", "lessThan", OperatorCategory::Comparison),
    bin(BinaryOperatorId::GreaterThan, ">", "greaterThan", OperatorCategory::Comparison),
    bin(
        BinaryOperatorId::LessThanEqual,
        "<=",
        "lessThanEqual",
        OperatorCategory::Comparison,
    ),
    bin(
        BinaryOperatorId::GreaterThanEqual,
        ">=",
        "greaterThanEqual",
        OperatorCategory::Comparison,
    ),
    bin(BinaryOperatorId::Equal, "==", "equal", OperatorCategory::Comparison),
    bin(BinaryOperatorId::NotEqual, "!=", "notEqual", OperatorCategory::Comparison),
    bin(BinaryOperatorId::And, "&&", "and", OperatorCategory::Logical),
    bin(BinaryOperatorId::Or, "||", "or", OperatorCategory::Logical),
    bin(BinaryOperatorId::Xor, "^^", "xor", OperatorCategory::Logical),
    bin(BinaryOperatorId::BitAnd, "&", "bitAnd", OperatorCategory::Bitwise),
    bin(BinaryOperatorId::BitOr, "|", "bitOr", OperatorCategory::Bitwise),
    bin(BinaryOperatorId::BitXor, "^", "bitXor", OperatorCategory::Bitwise),
    bin(BinaryOperatorId::ShiftLeft, "<<", "shiftLeft", OperatorCategory::Shift),
    bin(BinaryOperatorId::ShiftRight, ">>", "shiftRight", OperatorCategory::Shift),
    bin(
        BinaryOperatorId::AddAssign,
        "+=",
        "addAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::SubAssign,
        "-=",
        "subAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::MulAssign,
        "*=",
        "mulAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::DivAssign,
        "/=",
        "divAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::RemainderAssign,
        "%=",
        "remainderAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::BitXorAssign,
        "^=",
        "bitXorAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::BitAndAssign,
        "&=",
        "bitAndAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::BitOrAssign,
        "|=",
        "bitOrAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::ShiftLeftAssign,
        "<<=",
        "shiftLeftAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(
        BinaryOperatorId::ShiftRightAssign,
        ">>=",
        "shiftRightAssign",
        OperatorCategory::CompoundAssignment,
    ),
    bin(BinaryOperatorId::Member, ".", ".", OperatorCategory::Member),
];

/// Resolve a binary operator from its source spelling.
pub fn binary_from_str(spelling: &str) -> Option<BinaryOperatorId> {
    BINARY_OPERATORS
        .iter()
        .find(|info| info.spelling == spelling)
        .map(|info| info.id)
}

/// Return registry metadata for a binary operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (a bug in this module).
pub fn binary_info(id: BinaryOperatorId) -> &'static BinaryOperatorInfo {
    BINARY_OPERATORS
        .iter()
        .find(|info| info.id == id)
        .expect("INVARIANT: every BinaryOperatorId has a registry entry")
}

impl BinaryOperatorId {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        binary_info(self).spelling
    }

    /// Target combinator/method name.
    pub fn method_name(self) -> &'static str {
        binary_info(self).method
    }

    pub fn category(self) -> OperatorCategory {
        binary_info(self).category
    }

    /// `true` for `<`, `>`, `<=`, `>=`, `==`, `!=`.
    pub fn is_comparison(self) -> bool {
        self.category() == OperatorCategory::Comparison
    }
}

/// Stable identifier for every unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperatorId {
    Positive,
    Negate,
    BitNot,
    Not,
    Increment,
    Decrement,
}

/// Metadata for a unary operator.
///
/// ## Notes
/// - `method` is `None` for unary `+`, which has no combinator; the operand passes through unchanged.
/// - Increment/decrement have a `Before` variant (`incrementBefore`) used when the produced value is unused.
#[derive(Debug, Clone, Copy)]
pub struct UnaryOperatorInfo {
    pub id: UnaryOperatorId,
    pub spelling: &'static str,
    pub method: Option<&'static str>,
}

/// Registry of all unary operators.
pub const UNARY_OPERATORS: &[UnaryOperatorInfo] = &[
    UnaryOperatorInfo {
        id: UnaryOperatorId::Positive,
        spelling: "+",
        method: None,
    },
    UnaryOperatorInfo {
        id: UnaryOperatorId::Negate,
        spelling: "-",
        method: Some("negate"),
    },
    UnaryOperatorInfo {
        id: UnaryOperatorId::BitNot,
        spelling: "~",
        method: Some("bitNot"),
    },
    UnaryOperatorInfo {
        id: UnaryOperatorId::Not,
        spelling: "!",
        method: Some("not"),
    },
    UnaryOperatorInfo {
        id: UnaryOperatorId::Increment,
        spelling: "++",
        method: Some("increment"),
    },
    UnaryOperatorInfo {
        id: UnaryOperatorId::Decrement,
        spelling: "--",
        method: Some("decrement"),
    },
];

/// Resolve a unary operator from its source spelling.
pub fn unary_from_str(spelling: &str) -> Option<UnaryOperatorId> {
    UNARY_OPERATORS
        .iter()
        .find(|info| info.spelling == spelling)
        .map(|info| info.id)
}

/// Return registry metadata for a unary operator.
pub fn unary_info(id: UnaryOperatorId) -> &'static UnaryOperatorInfo {
    UNARY_OPERATORS
        .iter()
        .find(|info| info.id == id)
        .expect("INVARIANT: every UnaryOperatorId has a registry entry")
}

impl UnaryOperatorId {
    pub fn as_str(self) -> &'static str {
        unary_info(self).spelling
    }

    pub fn method_name(self) -> Option<&'static str> {
        unary_info(self).method
    }

    /// `true` for `++` and `--`.
    pub fn is_step(self) -> bool {
        matches!(self, UnaryOperatorId::Increment | UnaryOperatorId::Decrement)
    }
}
