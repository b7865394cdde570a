//! `If`, `Loop`, and `Switch` lowering.
//!
//! ## Notes
//! - `If`, `Loop`, and `Switch` chains end in `} )` and get a `;` from the enclosing body; the conditional-loop
//!   block ends in a bare `}` and does not.
//! - A `for` loop takes the compact `Loop( { start, end, … } )` form only when it counts a single declared
//!   variable (see [`CountingLoop`]); anything else becomes a conditional `Loop( cond, … )` in its own block.

use nodeshade_core::lang::operators::{BinaryOperatorId, OperatorCategory, UnaryOperatorId};
use nodeshade_syntax::Node;
use nodeshade_syntax::ast::{Conditional, Declarator, For, Operator, Switch};

use super::errors::EmitDiagnostic;
use super::{BlockKind, TslEncoder};

/// A `for` loop of the shape `for (T v = start; v <op> end; <step v>)`.
struct CountingLoop<'a> {
    counter: &'a Declarator,
    start: &'a Node,
    condition: &'a Operator,
    afterthought: &'a Node,
}

impl<'a> CountingLoop<'a> {
    fn classify(f: &'a For) -> Option<Self> {
        let Node::VariableDeclaration(init) = f.initialization.as_deref()? else {
            return None;
        };
        let counter = init.single()?;
        let start = counter.value.as_deref()?;

        let Node::Operator(condition) = f.condition.as_deref()? else {
            return None;
        };
        if !condition.op.is_comparison() || condition.left.accessor_name() != Some(counter.name.as_str()) {
            return None;
        }

        let afterthought = f.afterthought.as_deref()?;
        let steps_counter = match afterthought {
            Node::Unary(u) => u.op.is_step() && u.expression.accessor_name() == Some(counter.name.as_str()),
            Node::Operator(op) => {
                matches!(
                    op.op.category(),
                    OperatorCategory::Assignment | OperatorCategory::CompoundAssignment
                ) && op.left.accessor_name() == Some(counter.name.as_str())
            }
            _ => false,
        };

        steps_counter.then_some(Self {
            counter,
            start,
            condition,
            afterthought,
        })
    }
}

impl TslEncoder {
    pub(super) fn emit_conditional(&mut self, c: &Conditional) -> String {
        let cond = self.emit_expression(&c.cond);
        let body = self.emit_body(&c.body);
        let tab = self.tab();

        let mut code = format!("If( {cond}, () => {{\n\n{body}\n\n{tab}}} )");

        for branch in &c.alternates {
            let body = self.emit_body(&branch.body);
            match &branch.cond {
                Some(cond) => {
                    let cond = self.emit_expression(cond);
                    code.push_str(&format!(".ElseIf( {cond}, () => {{\n\n{body}\n\n{tab}}} )"));
                }
                None => code.push_str(&format!(".Else( () => {{\n\n{body}\n\n{tab}}} )")),
            }
        }

        self.scope.require("If");
        code
    }

    pub(super) fn emit_for(&mut self, f: &For) -> String {
        match CountingLoop::classify(f) {
            Some(counting) => self.emit_counting_loop(&counting, &f.body),
            None => {
                tracing::debug!("for loop does not count a single variable; emitting a conditional loop");
                self.emit_conditional_loop(f)
            }
        }
    }

    /// `Loop( { start: 0, end: 10 }, ( { i } ) => { … } )`, with overrides only where the loop differs from the
    /// `int i; i < end; i++` defaults.
    fn emit_counting_loop(&mut self, lp: &CountingLoop<'_>, body: &[Node]) -> String {
        let name = lp.counter.name.as_str();
        let start = self.emit_expression(lp.start);
        let end = self.emit_expression(&lp.condition.right);

        let mut config = format!("start: {start}, end: {end}");
        if name != "i" {
            config.push_str(&format!(", name: '{name}'"));
        }
        if lp.counter.ty != "int" {
            config.push_str(&format!(", type: '{}'", lp.counter.ty));
        }
        if lp.condition.op != BinaryOperatorId::LessThan {
            config.push_str(&format!(", condition: '{}'", lp.condition.op.as_str()));
        }
        match lp.afterthought {
            Node::Unary(u) if u.op != UnaryOperatorId::Increment => {
                config.push_str(&format!(", update: '{}'", u.op.as_str()));
            }
            // A bare step is applied additively, so only `+=`/`-=` may use the shorthand.
            Node::Operator(op)
                if matches!(op.op, BinaryOperatorId::AddAssign | BinaryOperatorId::SubAssign)
                    && matches!(op.right.as_ref(), Node::Accessor(_) | Node::Number(_)) =>
            {
                let step = self.emit_expression(&op.right);
                config.push_str(&format!(", update: {step}"));
            }
            Node::Operator(_) => {
                let update = self.emit_expression(lp.afterthought);
                config.push_str(&format!(", update: ( {{ {name} }} ) => {update}"));
            }
            _ => {}
        }

        let body = self.in_block(BlockKind::Loop, |e| e.emit_body(body));
        let tab = self.tab();

        self.scope.require("Loop");
        format!("Loop( {{ {config} }}, ( {{ {name} }} ) => {{\n\n{body}\n\n{tab}}} )")
    }

    /// A block holding the initializer and a `Loop( cond, … )` whose body ends with the afterthought.
    fn emit_conditional_loop(&mut self, f: &For) -> String {
        let init = f.initialization.as_deref().map(|n| self.emit_expression(n));
        let cond = match f.condition.as_deref() {
            Some(cond) => self.emit_expression(cond),
            None => "true".to_string(),
        };
        let after = f.afterthought.as_deref().map(|n| self.emit_expression(n));

        self.indent += 1;
        let tab = self.tab();

        let mut code = String::from("{\n\n");
        if let Some(init) = init {
            code.push_str(&format!("{tab}{init};\n\n"));
        }
        code.push_str(&format!("{tab}Loop( {cond}, () => {{\n\n"));
        let body = self.in_block(BlockKind::Loop, |e| e.emit_body(&f.body));
        code.push_str(&body);
        code.push_str("\n\n");
        if let Some(after) = after {
            code.push_str(&format!("{tab}\t{after};\n\n"));
        }
        code.push_str(&format!("{tab}}} )\n\n"));

        self.indent -= 1;
        code.push_str(&self.tab());
        code.push('}');

        self.scope.require("Loop");
        code
    }

    /// `Switch( d ).Case( a, b, () => { … } ).Default( () => { … } )`.
    ///
    /// Consecutive cases with empty bodies share the body of the next non-empty case, or of the default case
    /// when the run reaches it first.
    pub(super) fn emit_switch(&mut self, s: &Switch) -> String {
        let discriminant = self.emit_expression(&s.discriminant);

        self.indent += 1;
        let tab = self.tab();
        let mut code = format!("Switch( {discriminant} )\n{tab}");

        let previous = std::mem::replace(&mut self.block, BlockKind::SwitchCase);

        let cases = &s.cases;
        let mut idx = 0;
        while idx < cases.len() {
            match &cases[idx].condition {
                Some(first) => {
                    let mut conditions = vec![self.emit_expression(first)];
                    while cases[idx].body.is_empty() && idx + 1 < cases.len() && !cases[idx + 1].is_default() {
                        idx += 1;
                        if let Some(cond) = &cases[idx].condition {
                            conditions.push(self.emit_expression(cond));
                        }
                    }
                    if cases[idx].body.is_empty() && idx + 1 == cases.len() {
                        self.report(EmitDiagnostic::UnterminatedCaseGroup {
                            conditions: conditions.clone(),
                        });
                    }

                    // A group cut short by `default` falls through into the default body.
                    let shared = match cases.get(idx + 1) {
                        Some(next) if cases[idx].body.is_empty() && next.is_default() => &next.body,
                        _ => &cases[idx].body,
                    };
                    let body = self.emit_body(shared);
                    code.push_str(&format!(
                        ".Case( {}, () => {{\n\n{body}\n\n{tab}}} )",
                        conditions.join(", ")
                    ));
                }
                None => {
                    let body = self.emit_body(&cases[idx].body);
                    code.push_str(&format!(".Default( () => {{\n\n{body}\n\n{tab}}} )"));
                }
            }
            idx += 1;
        }

        self.block = previous;
        self.indent -= 1;

        self.scope.require("Switch");
        code
    }
}
