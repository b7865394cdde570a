//! Property-based tests for TSL generation
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use nodeshade::ast::builders::*;
use nodeshade::ast::{Node, Program};
use nodeshade::{EncodeOptions, encode};
use nodeshade_core::lang::operators::{BINARY_OPERATORS, OperatorCategory};
use proptest::prelude::*;

fn generate(body: Vec<Node>) -> String {
    encode(&Program::new(body), &EncodeOptions::new().with_revision("170"))
}

/// User identifiers that can never collide with a library symbol
fn user_ident() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| format!("v_{s}"))
}

fn float_literal() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}"))
}

/// Every binary operator except member access
fn call_operator() -> impl Strategy<Value = (&'static str, &'static str)> {
    let ops: Vec<_> = BINARY_OPERATORS
        .iter()
        .filter(|info| info.category != OperatorCategory::Member)
        .map(|info| (info.spelling, info.method))
        .collect();
    prop::sample::select(ops)
}

// =============================================================================
// Operator Properties
// =============================================================================

proptest! {
    /// Property: two primitive operands keep the source infix form
    #[test]
    fn primitive_operands_keep_infix(left in float_literal(), right in float_literal(), (op, _) in call_operator()) {
        let code = generate(vec![binary(op, number(&left), number(&right))]);
        let expected = format!("\n{left} {op} {right};\n");
        prop_assert!(code.ends_with(&expected));
    }

    /// Property: a non-literal left operand produces a method call on it
    #[test]
    fn identifier_left_uses_method(left in user_ident(), right in user_ident(), (op, method) in call_operator()) {
        let code = generate(vec![binary(op, accessor(&left), accessor(&right))]);
        let expected = format!("\n{left}.{method}( {right} );\n");
        prop_assert!(code.ends_with(&expected));
    }

    /// Property: a literal left operand with a non-literal right uses the imported free function
    #[test]
    fn literal_left_uses_free_function(left in float_literal(), right in user_ident(), (op, method) in call_operator()) {
        let code = generate(vec![binary(op, number(&left), accessor(&right))]);
        let import_line = format!("import {{ {method} }} from 'three/tsl';\n");
        let call_line = format!("\n{method}( {left}, {right} );\n");
        prop_assert!(code.contains(&import_line));
        prop_assert!(code.ends_with(&call_line));
    }
}

// =============================================================================
// Control Flow Properties
// =============================================================================

proptest! {
    /// Property: `for (int i = 0; i < N; i++)` always takes the default counting form
    #[test]
    fn counting_loop_has_no_overrides(end in 1u32..100_000) {
        let code = generate(vec![for_(
            let_("int", "i", Some(number("0"))),
            binary("<", accessor("i"), number(&end.to_string())),
            postfix("++", accessor("i")),
            vec![call("v_work", vec![])],
        )]);
        let expected = format!("Loop( {{ start: 0, end: {end} }}, ( {{ i }} ) => {{");
        prop_assert!(code.contains(&expected));
        prop_assert!(!code.contains("name:"));
        prop_assert!(!code.contains("update:"));
    }

    /// Property: a run of empty cases merges into the next case, conditions in source order, body once
    #[test]
    fn empty_cases_merge_into_next(empty in 0usize..6) {
        let mut cases: Vec<_> = (0..empty).map(|n| case(number(&n.to_string()), vec![])).collect();
        cases.push(case(number(&empty.to_string()), vec![call("v_body", vec![])]));
        let code = generate(vec![switch(accessor("v_mode"), cases)]);

        let conditions = (0..=empty).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
        let expected = format!(".Case( {conditions}, () => {{");
        prop_assert!(code.contains(&expected));
        prop_assert_eq!(code.matches(".Case(").count(), 1);
        prop_assert_eq!(code.matches("v_body()").count(), 1);
    }
}

// =============================================================================
// Function Properties
// =============================================================================

proptest! {
    /// Property: an overload group of size N yields N suffixed members and exactly one dispatcher listing them
    #[test]
    fn overload_group_has_one_dispatcher(size in 2usize..6, name in user_ident()) {
        let body = (0..size)
            .map(|n| function(&name, "float", vec![param("float", &format!("p{n}"))], vec![]))
            .collect();
        let code = generate(body);

        let members = (0..size).map(|n| format!("{name}_{n}")).collect::<Vec<_>>().join(", ");
        let dispatcher = format!("export const {name} = /*#__PURE__*/ overloadingFn( [ {members} ] );\n");
        prop_assert!(code.ends_with(&dispatcher));
        prop_assert_eq!(code.matches("overloadingFn( [").count(), 1);
        for n in 0..size {
            let member = format!("export const {name}_{n} = /*#__PURE__*/ Fn(");
            prop_assert_eq!(code.matches(member.as_str()).count(), 1);
        }
    }

    /// Property: generation is a pure function of (AST, options)
    #[test]
    fn generation_is_idempotent(names in prop::collection::vec(user_ident(), 1..5), iife in any::<bool>()) {
        let program = Program::new(names.iter().map(|n| uniform("float", n)).collect());
        let options = EncodeOptions::new().with_iife(iife);
        prop_assert_eq!(encode(&program, &options), encode(&program, &options));
    }
}
