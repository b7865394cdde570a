//! Binary and unary operator lowering.

use nodeshade_core::lang::literals::is_primitive_literal;
use nodeshade_core::lang::operators::BinaryOperatorId;
use nodeshade_syntax::Node;
use nodeshade_syntax::ast::{Operator, Unary};

use super::super::TslEncoder;

impl TslEncoder {
    /// Lower a binary operator.
    ///
    /// Forms, by operand shape:
    /// - both primitive: source infix (`2 + 3`)
    /// - left primitive: free function (`add( 1, x )`)
    /// - member access: concatenation (`a.b`)
    /// - otherwise: method on the left operand (`x.add( 1 )`)
    pub(super) fn emit_binary(&mut self, op: &Operator) -> String {
        let method = op.op.method_name();
        let left = self.emit_expression(&op.left);
        let right = self.emit_expression(&op.right);

        if is_primitive_literal(&left) && is_primitive_literal(&right) {
            return format!("{left} {} {right}", op.op.as_str());
        }

        if is_primitive_literal(&left) {
            self.scope.add_import(method);
            format!("{method}( {left}, {right} )")
        } else if op.op == BinaryOperatorId::Member {
            format!("{left}.{right}")
        } else {
            format!("{left}.{method}( {right} )")
        }
    }

    /// Lower a unary operator.
    ///
    /// ## Notes
    /// - A numeric operand is folded into its constructor: `-1.0` becomes `float( - 1.0 )`.
    /// - `++`/`--` lower to the `…Before` method unless they are a postfix operand inside a variable initializer,
    ///   the only place where the pre-update value can be observed.
    pub(super) fn emit_unary(&mut self, u: &Unary) -> String {
        if let Node::Number(n) = u.expression.as_ref() {
            let kind = n.ty.as_str();
            self.scope.add_import(kind);
            return format!("{kind}( {} {} )", u.op.as_str(), n.value);
        }

        let Some(base) = u.op.method_name() else {
            return self.emit_expression(&u.expression);
        };
        let method = if u.op.is_step() && (!self.in_initializer || !u.postfix) {
            format!("{base}Before")
        } else {
            base.to_string()
        };

        let operand = self.emit_expression(&u.expression);
        if is_primitive_literal(&operand) {
            self.scope.add_import(&method);
            format!("{method}( {operand} )")
        } else {
            format!("{operand}.{method}()")
        }
    }
}
