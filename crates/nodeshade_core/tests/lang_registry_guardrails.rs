use std::collections::HashMap;

use nodeshade_core::lang::library;
use nodeshade_core::lang::operators;
use nodeshade_core::lang::sampling;

#[test]
fn binary_operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::BinaryOperatorId> = HashMap::new();

    for info in operators::BINARY_OPERATORS {
        assert_eq!(
            operators::binary_from_str(info.spelling),
            Some(info.id),
            "binary operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate binary operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn binary_operator_methods_unique() {
    let mut seen: HashMap<&'static str, operators::BinaryOperatorId> = HashMap::new();

    for info in operators::BINARY_OPERATORS {
        if let Some(prev) = seen.insert(info.method, info.id) {
            panic!("duplicate method name {:?}: {:?} and {:?}", info.method, prev, info.id);
        }
    }
}

#[test]
fn unary_operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::UnaryOperatorId> = HashMap::new();

    for info in operators::UNARY_OPERATORS {
        assert_eq!(operators::unary_from_str(info.spelling), Some(info.id));
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate unary operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn library_symbols_sorted_and_unique() {
    for pair in library::SYMBOLS.windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "library symbols out of order or duplicated: {:?} then {:?}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn library_symbols_resolvable() {
    for info in library::SYMBOLS {
        assert!(library::is_symbol(info.name), "symbol not resolvable: {}", info.name);
        assert_eq!(library::kind_of(info.name), Some(info.kind));
    }
}

#[test]
fn emitter_control_flow_names_are_symbols() {
    for name in [
        "Fn",
        "If",
        "Loop",
        "Switch",
        "Break",
        "Continue",
        "Discard",
        "overloadingFn",
        "select",
        "uniform",
        "texture",
        "cubeTexture",
        "texture3D",
        "reference",
        "varying",
        "int",
        "uint",
    ] {
        assert!(library::is_symbol(name), "emitter relies on missing symbol {}", name);
    }
}

#[test]
fn sampling_names_unique() {
    let mut seen: HashMap<&'static str, sampling::SamplingFnId> = HashMap::new();

    for info in sampling::SAMPLING_FUNCTIONS {
        assert_eq!(sampling::from_str(info.name), Some(info.id));
        if let Some(prev) = seen.insert(info.name, info.id) {
            panic!("duplicate sampling name {:?}: {:?} and {:?}", info.name, prev, info.id);
        }
    }
}

#[test]
fn library_covers_common_shader_exports() {
    let expected = [
        ("textureSize", library::SymbolKind::Resource),
        ("attribute", library::SymbolKind::Resource),
        ("PI", library::SymbolKind::Math),
        ("EPSILON", library::SymbolKind::Math),
        ("cbrt", library::SymbolKind::Math),
        ("lengthSq", library::SymbolKind::Math),
        ("modelWorldMatrix", library::SymbolKind::Input),
        ("cameraProjectionMatrix", library::SymbolKind::Input),
        ("frontFacing", library::SymbolKind::Input),
    ];
    for (name, kind) in expected {
        assert_eq!(library::kind_of(name), Some(kind), "missing library export {name}");
    }
}
