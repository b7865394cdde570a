//! Terse constructors for AST nodes.
//!
//! Front ends and tests build trees with these instead of spelling out nested struct literals.
//!
//! ## Panics
//! - [`binary`] and [`unary`] panic on an operator spelling missing from the registry. They are meant for
//!   literal spellings written by hand; use [`nodeshade_core::lang::operators`] to resolve untrusted input.
//!
//! ## Examples
//! ```rust
//! use nodeshade_syntax::builders::*;
//!
//! let sum = binary("+", accessor("x"), number("1"));
//! let ret = ret(Some(sum));
//! assert_eq!(ret.kind_name(), "Return");
//! ```

use nodeshade_core::lang::literals::NumberKind;
use nodeshade_core::lang::operators;

use crate::ast::*;

pub fn number(value: &str) -> Node {
    Node::Number(NumberLiteral {
        value: value.to_string(),
        ty: NumberKind::Float,
    })
}

pub fn typed_number(value: &str, ty: NumberKind) -> Node {
    Node::Number(NumberLiteral {
        value: value.to_string(),
        ty,
    })
}

pub fn string(value: &str) -> Node {
    Node::String(StringLiteral {
        value: value.to_string(),
    })
}

pub fn accessor(name: &str) -> Node {
    Node::Accessor(Accessor {
        property: name.to_string(),
    })
}

pub fn chain(object: Node, elements: Vec<Element>) -> Node {
    Node::AccessorChain(AccessorChain {
        object: Box::new(object),
        elements,
    })
}

/// `.name` element of an accessor chain.
pub fn field(name: &str) -> Element {
    Element::Static {
        value: Box::new(accessor(name)),
    }
}

/// `[index]` element of an accessor chain.
pub fn index(value: Node) -> Element {
    Element::Dynamic { value: Box::new(value) }
}

pub fn binary(op: &str, left: Node, right: Node) -> Node {
    let op = operators::binary_from_str(op).unwrap_or_else(|| panic!("unknown binary operator `{op}`"));
    Node::Operator(Operator {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(op: &str, expression: Node) -> Node {
    let op = operators::unary_from_str(op).unwrap_or_else(|| panic!("unknown unary operator `{op}`"));
    Node::Unary(Unary {
        op,
        expression: Box::new(expression),
        postfix: false,
    })
}

/// Postfix form (`i++`).
pub fn postfix(op: &str, expression: Node) -> Node {
    match unary(op, expression) {
        Node::Unary(u) => Node::Unary(Unary { postfix: true, ..u }),
        other => other,
    }
}

pub fn ternary(cond: Node, left: Node, right: Node) -> Node {
    Node::Ternary(Ternary {
        cond: Box::new(cond),
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn call(name: &str, params: Vec<Node>) -> Node {
    Node::FunctionCall(FunctionCall {
        name: name.to_string(),
        params,
    })
}

pub fn ret(value: Option<Node>) -> Node {
    Node::Return(Return {
        value: value.map(Box::new),
    })
}

pub fn declarator(ty: &str, name: &str, value: Option<Node>) -> Declarator {
    Declarator {
        name: name.to_string(),
        ty: ty.to_string(),
        value: value.map(Box::new),
        mutable: false,
    }
}

/// Single immutable declaration: `const name = ty( value )`.
pub fn let_(ty: &str, name: &str, value: Option<Node>) -> Node {
    Node::VariableDeclaration(VariableDeclaration {
        declarators: vec![declarator(ty, name, value)],
    })
}

/// Single mutable declaration: `const name = ty( value ).toVar()`.
pub fn var(ty: &str, name: &str, value: Option<Node>) -> Node {
    Node::VariableDeclaration(VariableDeclaration {
        declarators: vec![Declarator {
            mutable: true,
            ..declarator(ty, name, value)
        }],
    })
}

pub fn declaration(declarators: Vec<Declarator>) -> Node {
    Node::VariableDeclaration(VariableDeclaration { declarators })
}

pub fn uniform(ty: &str, name: &str) -> Node {
    Node::Uniform(UniformDeclaration {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

pub fn varying(ty: &str, name: &str) -> Node {
    Node::Varying(VaryingDeclaration {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

pub fn param(ty: &str, name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: ty.to_string(),
        qualifier: None,
        mutable: false,
    }
}

pub fn function(name: &str, ty: &str, params: Vec<Parameter>, body: Vec<Node>) -> Node {
    Node::FunctionDeclaration(FunctionDeclaration {
        name: name.to_string(),
        ty: ty.to_string(),
        params,
        body,
        layout: true,
    })
}

pub fn if_(cond: Node, body: Vec<Node>) -> Conditional {
    Conditional {
        cond: Box::new(cond),
        body,
        alternates: Vec::new(),
    }
}

impl Conditional {
    pub fn else_if(mut self, cond: Node, body: Vec<Node>) -> Self {
        self.alternates.push(ElseBranch {
            cond: Some(Box::new(cond)),
            body,
        });
        self
    }

    pub fn else_(mut self, body: Vec<Node>) -> Self {
        self.alternates.push(ElseBranch { cond: None, body });
        self
    }
}

impl From<Conditional> for Node {
    fn from(c: Conditional) -> Self {
        Node::Conditional(c)
    }
}

pub fn case(condition: Node, body: Vec<Node>) -> SwitchCase {
    SwitchCase {
        condition: Some(Box::new(condition)),
        body,
    }
}

pub fn default_case(body: Vec<Node>) -> SwitchCase {
    SwitchCase { condition: None, body }
}

pub fn switch(discriminant: Node, cases: Vec<SwitchCase>) -> Node {
    Node::Switch(Switch {
        discriminant: Box::new(discriminant),
        cases,
    })
}

pub fn for_(initialization: Node, condition: Node, afterthought: Node, body: Vec<Node>) -> Node {
    Node::For(For {
        initialization: Some(Box::new(initialization)),
        condition: Some(Box::new(condition)),
        afterthought: Some(Box::new(afterthought)),
        body,
    })
}
