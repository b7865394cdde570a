//! Abstract Syntax Tree definitions for the shading language
//!
//! The tree is produced by an external front end and handed to the generator already validated. Every node kind
//! is one variant of [`Node`]; chains that the front end models as linked nodes (comma declarations, `else if`
//! links, switch cases) are plain vectors here.
//!
//! ## Wire format
//!
//! Nodes serialize as internally tagged JSON objects (`{"kind": "Accessor", "property": "uv"}`) with camelCase
//! field names. A `kind` the generator does not know deserializes to [`Node::Unknown`].

use nodeshade_core::lang::literals::NumberKind;
use nodeshade_core::lang::operators::{BinaryOperatorId, UnaryOperatorId};
use serde::{Deserialize, Serialize};

/// Identifier
pub type Ident = String;

/// A program is the ordered list of top-level statements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

/// Every node kind the generator consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    // Expressions
    Number(NumberLiteral),
    String(StringLiteral),
    Accessor(Accessor),
    AccessorChain(AccessorChain),
    Operator(Operator),
    Unary(Unary),
    Ternary(Ternary),
    FunctionCall(FunctionCall),

    // Control ops
    Return(Return),
    Break,
    Continue,
    Discard,

    // Declarations
    VariableDeclaration(VariableDeclaration),
    Uniform(UniformDeclaration),
    Varying(VaryingDeclaration),
    FunctionDeclaration(FunctionDeclaration),

    // Control flow
    Conditional(Conditional),
    Switch(Switch),
    For(For),

    /// Any node kind not listed above.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Short kind name, used in diagnostics and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "Number",
            Node::String(_) => "String",
            Node::Accessor(_) => "Accessor",
            Node::AccessorChain(_) => "AccessorChain",
            Node::Operator(_) => "Operator",
            Node::Unary(_) => "Unary",
            Node::Ternary(_) => "Ternary",
            Node::FunctionCall(_) => "FunctionCall",
            Node::Return(_) => "Return",
            Node::Break => "Break",
            Node::Continue => "Continue",
            Node::Discard => "Discard",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::Uniform(_) => "Uniform",
            Node::Varying(_) => "Varying",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::Conditional(_) => "Conditional",
            Node::Switch(_) => "Switch",
            Node::For(_) => "For",
            Node::Unknown => "Unknown",
        }
    }

    /// A statement is expression-like unless it is a function declaration, a for-loop, a conditional, or a switch.
    pub fn is_expression_like(&self) -> bool {
        !matches!(
            self,
            Node::FunctionDeclaration(_) | Node::For(_) | Node::Conditional(_) | Node::Switch(_)
        )
    }

    /// The referenced name when this node is a bare [`Accessor`].
    pub fn accessor_name(&self) -> Option<&str> {
        match self {
            Node::Accessor(a) => Some(a.property.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    /// Literal text exactly as written in the source (`1.0`, `3`, `0x10`).
    pub value: String,
    #[serde(rename = "type", default, with = "number_kind")]
    pub ty: NumberKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

/// A bare identifier reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessor {
    pub property: Ident,
}

/// `object.field[index]...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorChain {
    pub object: Box<Node>,
    pub elements: Vec<Element>,
}

/// One link of an [`AccessorChain`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Element {
    /// Named field access (`.xyz`)
    Static { value: Box<Node> },
    /// Expression-valued index (`[i]`)
    Dynamic { value: Box<Node> },
}

/// Binary operator application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(rename = "type", with = "binary_op")]
    pub op: BinaryOperatorId,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Unary operator application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unary {
    #[serde(rename = "type", with = "unary_op")]
    pub op: UnaryOperatorId,
    pub expression: Box<Node>,
    /// `true` for postfix forms (`i++`).
    #[serde(default)]
    pub postfix: bool,
}

/// `cond ? left : right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ternary {
    pub cond: Box<Node>,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: Ident,
    #[serde(default)]
    pub params: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub value: Option<Box<Node>>,
}

// ============================================================================
// Declarations
// ============================================================================

/// `type a = 1, b = 2;`
///
/// Only the first declarator is emitted with the declaration keyword; the rest are comma-joined bindings of the
/// same statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub declarators: Vec<Declarator>,
}

impl VariableDeclaration {
    /// The declarator when the declaration binds exactly one name.
    pub fn single(&self) -> Option<&Declarator> {
        match self.declarators.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declarator {
    pub name: Ident,
    #[serde(rename = "type")]
    pub ty: Ident,
    #[serde(default)]
    pub value: Option<Box<Node>>,
    /// The binding is reassigned later.
    #[serde(default)]
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformDeclaration {
    pub name: Ident,
    #[serde(rename = "type")]
    pub ty: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaryingDeclaration {
    pub name: Ident,
    #[serde(rename = "type")]
    pub ty: Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    In,
    Out,
    Inout,
}

impl Qualifier {
    /// `out` and `inout` parameters behave like pointers.
    pub fn is_pointer(self) -> bool {
        matches!(self, Qualifier::Out | Qualifier::Inout)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Ident,
    #[serde(rename = "type")]
    pub ty: Ident,
    #[serde(default)]
    pub qualifier: Option<Qualifier>,
    #[serde(default)]
    pub mutable: bool,
}

impl Parameter {
    pub fn is_pointer(&self) -> bool {
        self.qualifier.is_some_and(Qualifier::is_pointer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: Ident,
    /// Return type
    #[serde(rename = "type")]
    pub ty: Ident,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub body: Vec<Node>,
    /// Whether layout metadata may be emitted for this function.
    #[serde(default = "default_true")]
    pub layout: bool,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Control flow
// ============================================================================

/// `if (cond) { body } else if (...) { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub cond: Box<Node>,
    pub body: Vec<Node>,
    /// `else if` links (with a condition) and a final `else` (without), in source order.
    #[serde(default)]
    pub alternates: Vec<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseBranch {
    #[serde(default)]
    pub cond: Option<Box<Node>>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub discriminant: Box<Node>,
    pub cases: Vec<SwitchCase>,
}

/// One `case` label (or `default` when `condition` is absent) with its body.
///
/// An empty body groups the label with the next case instead of falling through at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    #[serde(default)]
    pub condition: Option<Box<Node>>,
    #[serde(default)]
    pub body: Vec<Node>,
}

impl SwitchCase {
    pub fn is_default(&self) -> bool {
        self.condition.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    #[serde(default)]
    pub initialization: Option<Box<Node>>,
    #[serde(default)]
    pub condition: Option<Box<Node>>,
    #[serde(default)]
    pub afterthought: Option<Box<Node>>,
    pub body: Vec<Node>,
}

// ============================================================================
// Serde adapters for registry ids
// ============================================================================

mod number_kind {
    use nodeshade_core::lang::literals::NumberKind;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(kind: &NumberKind, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(kind.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NumberKind, D::Error> {
        let s = String::deserialize(d)?;
        NumberKind::from_str(&s).ok_or_else(|| D::Error::custom(format!("unknown number type `{s}`")))
    }
}

mod binary_op {
    use nodeshade_core::lang::operators::{self, BinaryOperatorId};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(op: &BinaryOperatorId, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(op.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BinaryOperatorId, D::Error> {
        let s = String::deserialize(d)?;
        operators::binary_from_str(&s).ok_or_else(|| D::Error::custom(format!("unknown binary operator `{s}`")))
    }
}

mod unary_op {
    use nodeshade_core::lang::operators::{self, UnaryOperatorId};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(op: &UnaryOperatorId, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(op.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<UnaryOperatorId, D::Error> {
        let s = String::deserialize(d)?;
        operators::unary_from_str(&s).ok_or_else(|| D::Error::custom(format!("unknown unary operator `{s}`")))
    }
}
