//! Expression lowering.
//!
//! [`TslEncoder::emit_expression`] is the single dispatch point for every node kind: statements such as loops and
//! declarations are lowered through it too, since a body is a list of nodes each emitted as one line.
//!
//! ## Notes
//! - Operand text decides the operator form: when both sides are primitive literals (see
//!   [`is_primitive_literal`](nodeshade_core::lang::literals::is_primitive_literal)) the source infix form is kept.
//! - Empty output for any node is replaced by [`UNKNOWN_STATEMENT`].

mod access;
mod calls;
mod operators;

use nodeshade_syntax::Node;
use nodeshade_syntax::ast::{NumberLiteral, Return, Ternary};

use super::errors::EmitDiagnostic;
use super::{TslEncoder, UNKNOWN_STATEMENT};

impl TslEncoder {
    /// Lower one node to TSL text.
    pub(super) fn emit_expression(&mut self, node: &Node) -> String {
        let code = match node {
            Node::Accessor(a) => {
                self.scope.add_import(&a.property);
                a.property.clone()
            }
            Node::Number(n) => self.emit_number(n),
            Node::String(s) => format!("'{}'", s.value),
            Node::Operator(op) => self.emit_binary(op),
            Node::Unary(u) => self.emit_unary(u),
            Node::Ternary(t) => self.emit_ternary(t),
            Node::FunctionCall(c) => self.emit_call(c),
            Node::AccessorChain(c) => self.emit_accessor_chain(c),

            Node::Return(r) => self.emit_return(r),
            Node::Break => self.emit_control_call("Break"),
            Node::Continue => self.emit_control_call("Continue"),
            Node::Discard => self.emit_control_call("Discard"),

            Node::VariableDeclaration(v) => self.emit_variables(v),
            Node::Uniform(u) => self.emit_uniform(u),
            Node::Varying(v) => self.emit_varying(v),

            Node::Conditional(c) => self.emit_conditional(c),
            Node::Switch(s) => self.emit_switch(s),
            Node::For(f) => self.emit_for(f),

            Node::FunctionDeclaration(f) => {
                self.report(EmitDiagnostic::NestedFunction { name: f.name.clone() });
                String::new()
            }
            Node::Unknown => {
                self.report(EmitDiagnostic::UnknownNode);
                String::new()
            }
        };

        if code.is_empty() {
            UNKNOWN_STATEMENT.to_string()
        } else {
            code
        }
    }

    /// `int`/`uint` literals are wrapped in their conversion; float literals are emitted as written.
    fn emit_number(&mut self, n: &NumberLiteral) -> String {
        if !n.ty.is_narrow() {
            return n.value.clone();
        }
        let kind = n.ty.as_str();
        self.scope.add_import(kind);
        format!("{kind}( {} )", n.value)
    }

    fn emit_ternary(&mut self, t: &Ternary) -> String {
        let cond = self.emit_expression(&t.cond);
        let left = self.emit_expression(&t.left);
        let right = self.emit_expression(&t.right);
        self.scope.add_import("select");
        format!("select( {cond}, {left}, {right} )")
    }

    fn emit_return(&mut self, r: &Return) -> String {
        match &r.value {
            Some(value) => format!("return {}", self.emit_expression(value)),
            None => "return".to_string(),
        }
    }

    /// `Break()`, `Continue()`, `Discard()`.
    fn emit_control_call(&mut self, name: &str) -> String {
        self.scope.add_import(name);
        format!("{name}()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeshade_core::lang::literals::NumberKind;
    use nodeshade_syntax::builders::*;

    fn imports(encoder: &TslEncoder) -> Vec<&str> {
        encoder.scope.imports().collect()
    }

    #[test]
    fn test_narrow_numbers_are_wrapped() {
        let mut encoder = TslEncoder::default();
        assert_eq!(encoder.emit_expression(&typed_number("5", NumberKind::Int)), "int( 5 )");
        assert_eq!(encoder.emit_expression(&typed_number("7", NumberKind::Uint)), "uint( 7 )");
        assert_eq!(encoder.emit_expression(&number("1.5")), "1.5");
        assert_eq!(imports(&encoder), vec!["int", "uint"]);
    }

    #[test]
    fn test_string_literal_single_quoted() {
        let mut encoder = TslEncoder::default();
        assert_eq!(encoder.emit_expression(&string("hello")), "'hello'");
    }

    #[test]
    fn test_ternary_lowers_to_select() {
        let mut encoder = TslEncoder::default();
        let node = ternary(accessor("c"), number("1.0"), number("0.0"));
        assert_eq!(encoder.emit_expression(&node), "select( c, 1.0, 0.0 )");
        assert_eq!(imports(&encoder), vec!["select"]);
    }

    #[test]
    fn test_control_ops() {
        let mut encoder = TslEncoder::default();
        assert_eq!(encoder.emit_expression(&Node::Discard), "Discard()");
        assert_eq!(encoder.emit_expression(&Node::Continue), "Continue()");
        assert_eq!(encoder.emit_expression(&ret(None)), "return");
        assert_eq!(encoder.emit_expression(&ret(Some(accessor("x")))), "return x");
        assert_eq!(imports(&encoder), vec!["Discard", "Continue"]);
    }

    #[test]
    fn test_unknown_node_placeholder_and_diagnostic() {
        let mut encoder = TslEncoder::default();
        assert_eq!(encoder.emit_expression(&Node::Unknown), UNKNOWN_STATEMENT);
        assert_eq!(encoder.diagnostics, vec![EmitDiagnostic::UnknownNode]);
    }

    #[test]
    fn test_nested_function_is_reported() {
        let mut encoder = TslEncoder::default();
        let inner = function("inner", "void", vec![], vec![]);
        assert_eq!(encoder.emit_expression(&inner), UNKNOWN_STATEMENT);
        assert!(matches!(
            encoder.diagnostics.as_slice(),
            [EmitDiagnostic::NestedFunction { name }] if name == "inner"
        ));
    }
}
