//! Golden snapshot tests for TSL generation
//!
//! These tests load JSON ASTs from `tests/codegen_snapshots/`, generate TSL documents, and compare them against
//! stored snapshots. This ensures codegen changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use nodeshade::ast::json;
use nodeshade::{EncodeOptions, TslEncoder};
use std::fs;

/// Load a test AST from the codegen_snapshots directory
fn load_test_file(name: &str) -> nodeshade::ast::Program {
    let path = format!("tests/codegen_snapshots/{}.json", name);
    let source = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path));
    json::from_json(&source).unwrap_or_else(|e| panic!("Failed to load {}: {}", path, e))
}

/// Generate a TSL document, asserting that generation was clean
fn generate_tsl(name: &str, options: EncodeOptions) -> String {
    let program = load_test_file(name);
    let encoded = TslEncoder::new(options.with_revision("170")).encode(&program);
    assert!(encoded.diagnostics.is_empty(), "unexpected diagnostics: {:?}", encoded.diagnostics);
    encoded.code
}

#[test]
fn test_lighting_module_codegen() {
    let code = generate_tsl("lighting", EncodeOptions::new());
    insta::assert_snapshot!("lighting_module", code);
}

#[test]
fn test_lighting_closure_codegen() {
    let code = generate_tsl("lighting", EncodeOptions::new().with_iife(true));
    insta::assert_snapshot!("lighting_closure", code);
}

#[test]
fn test_control_flow_codegen() {
    let code = generate_tsl("control_flow", EncodeOptions::new());
    insta::assert_snapshot!("control_flow", code);
}

#[test]
fn test_overloads_codegen() {
    let code = generate_tsl("overloads", EncodeOptions::new());
    insta::assert_snapshot!("overloads", code);
}

#[test]
fn test_textured_codegen() {
    let code = generate_tsl("textured", EncodeOptions::new());
    insta::assert_snapshot!("textured", code);
}

#[test]
fn test_textured_reference_closure_codegen() {
    let code = generate_tsl("textured", EncodeOptions::new().with_iife(true).with_reference(true));
    insta::assert_snapshot!("textured_reference_closure", code);
}
