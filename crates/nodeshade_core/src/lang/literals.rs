//! Numeric literal kinds and primitive-literal classification.

/// Declared sub-kind of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberKind {
    #[default]
    Float,
    Int,
    Uint,
}

impl NumberKind {
    /// The TSL constructor spelling (`float`, `int`, `uint`).
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Float => "float",
            NumberKind::Int => "int",
            NumberKind::Uint => "uint",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "float" => Some(NumberKind::Float),
            "int" => Some(NumberKind::Int),
            "uint" => Some(NumberKind::Uint),
            _ => None,
        }
    }

    /// Narrow kinds are wrapped in an explicit conversion call when emitted.
    pub fn is_narrow(self) -> bool {
        matches!(self, NumberKind::Int | NumberKind::Uint)
    }
}

/// Check whether lowered text is a primitive literal (numeric or boolean).
///
/// Matches text that starts with `true`, `false`, or an optional `-` followed by a digit or by `.` and a digit.
/// Only the prefix is inspected, so `2 + 3` (an already-folded infix form) also counts as primitive.
///
/// ## Examples
/// ```rust
/// use nodeshade_core::lang::literals::is_primitive_literal;
///
/// assert!(is_primitive_literal("1.0"));
/// assert!(is_primitive_literal("-.5"));
/// assert!(is_primitive_literal("true"));
/// assert!(!is_primitive_literal("x"));
/// assert!(!is_primitive_literal("int( 1 )"));
/// ```
pub fn is_primitive_literal(text: &str) -> bool {
    if text.starts_with("true") || text.starts_with("false") {
        return true;
    }
    let rest = text.strip_prefix('-').unwrap_or(text);
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'.') => bytes.get(1).is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_kind_spellings() {
        assert_eq!(NumberKind::Uint.as_str(), "uint");
        assert_eq!(NumberKind::from_str("int"), Some(NumberKind::Int));
        assert_eq!(NumberKind::from_str("double"), None);
        assert!(!NumberKind::Float.is_narrow());
    }

    #[test]
    fn test_primitive_prefixes() {
        assert!(is_primitive_literal("0"));
        assert!(is_primitive_literal("-3"));
        assert!(is_primitive_literal(".25"));
        assert!(is_primitive_literal("falsey"));
        assert!(is_primitive_literal("2 + 3"));
    }

    #[test]
    fn test_non_primitives() {
        assert!(!is_primitive_literal(""));
        assert!(!is_primitive_literal("-"));
        assert!(!is_primitive_literal("."));
        assert!(!is_primitive_literal("-x"));
        assert!(!is_primitive_literal("uv.x"));
        assert!(!is_primitive_literal("'str'"));
    }
}
