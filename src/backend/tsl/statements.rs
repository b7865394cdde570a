//! Statement bodies and the blank-line spacing between statements.

use nodeshade_syntax::Node;

use super::{BlockKind, TslEncoder};

/// Separator placed before `current` given the statement emitted just before it in the same body.
///
/// A blank line goes before every `return`, and between two statements unless both are expression-like. Two
/// consecutive control-flow statements are therefore separated as well.
pub(super) fn extra_line(previous: Option<&Node>, current: &Node) -> &'static str {
    let Some(previous) = previous else {
        return "";
    };
    if matches!(current, Node::Return(_)) {
        return "\n";
    }
    match (previous.is_expression_like(), current.is_expression_like()) {
        (true, true) => "",
        _ => "\n",
    }
}

impl TslEncoder {
    /// Emit a statement list one tab deeper than the current depth.
    ///
    /// Each statement gets its own line and a trailing `;` unless the text emitted so far ends with `}`. The final
    /// newline is dropped; callers add their own framing.
    pub(super) fn emit_body<'n>(&mut self, body: impl IntoIterator<Item = &'n Node>) -> String {
        let mut code = String::new();
        let mut previous: Option<&Node> = None;

        self.indent += 1;
        for statement in body {
            // `Break` closes every TSL case body on its own
            if self.block == BlockKind::SwitchCase && matches!(statement, Node::Break) {
                continue;
            }

            code.push_str(extra_line(previous, statement));
            code.push_str(&self.tab());
            code.push_str(&self.emit_expression(statement));
            if !code.ends_with('}') {
                code.push(';');
            }
            code.push('\n');

            previous = Some(statement);
        }
        if code.ends_with('\n') {
            code.pop();
        }
        self.indent -= 1;

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeshade_syntax::builders::*;

    #[test]
    fn test_first_statement_has_no_separator() {
        assert_eq!(extra_line(None, &ret(None)), "");
    }

    #[test]
    fn test_return_always_separated() {
        let assign = binary("=", accessor("a"), number("1"));
        assert_eq!(extra_line(Some(&assign), &ret(None)), "\n");
    }

    #[test]
    fn test_expression_runs_stay_packed() {
        let a = let_("float", "a", None);
        let b = call("foo", vec![]);
        assert_eq!(extra_line(Some(&a), &b), "");
    }

    #[test]
    fn test_control_flow_is_separated_on_both_sides() {
        let stmt = call("foo", vec![]);
        let branch: Node = if_(accessor("c"), vec![]).into();
        let lp = for_(
            let_("int", "i", Some(number("0"))),
            binary("<", accessor("i"), number("3")),
            postfix("++", accessor("i")),
            vec![],
        );
        assert_eq!(extra_line(Some(&stmt), &branch), "\n");
        assert_eq!(extra_line(Some(&branch), &stmt), "\n");
        assert_eq!(extra_line(Some(&branch), &lp), "\n");
        assert_eq!(extra_line(Some(&branch), &branch), "\n");
    }

    #[test]
    fn test_body_strips_final_newline_and_adds_semicolons() {
        let mut encoder = TslEncoder::default();
        let body = vec![call("foo", vec![]), ret(Some(accessor("x")))];
        assert_eq!(encoder.emit_body(&body), "\tfoo();\n\n\treturn x;");
        assert_eq!(encoder.indent, 0);
    }

    #[test]
    fn test_break_dropped_only_in_case_body() {
        let body = vec![call("foo", vec![]), Node::Break];

        let mut encoder = TslEncoder::default();
        let in_case = encoder.in_block(BlockKind::SwitchCase, |e| e.emit_body(&body));
        assert_eq!(in_case, "\tfoo();");

        let in_loop = encoder.in_block(BlockKind::Loop, |e| e.emit_body(&body));
        assert_eq!(in_loop, "\tfoo();\n\tBreak();");
    }
}
