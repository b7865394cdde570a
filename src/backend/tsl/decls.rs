//! Declaration lowering: variables, uniforms, varyings, and functions.
//!
//! ## Notes
//! - Uniforms, varyings, and functions become globals: later references to them never import a library symbol of
//!   the same name, and closure mode returns them.
//! - A function parameter the body reassigns is received under an `_immutable` name and shadowed by a mutable
//!   local (`const x = float( x_immutable ).toVar()`), since TSL function inputs are read-only.

use nodeshade_syntax::Node;
use nodeshade_syntax::ast::{
    Accessor, Declarator, FunctionDeclaration, UniformDeclaration, VariableDeclaration, VaryingDeclaration,
};

use super::scope::OverloadMember;
use super::{BlockKind, IMMUTABLE_SUFFIX, TslEncoder};

/// Constructor and engine class for a resource uniform, keyed by its logical type.
fn resource_uniform(ty: &str) -> Option<(&'static str, &'static str)> {
    match ty {
        "texture" | "sampler2D" => Some(("texture", "THREE.Texture")),
        "cubeTexture" | "samplerCube" => Some(("cubeTexture", "THREE.CubeTexture")),
        "texture3D" | "sampler3D" => Some(("texture3D", "THREE.Data3DTexture")),
        _ => None,
    }
}

/// A value that already is a call to the declared type's constructor needs no second wrap.
fn is_own_constructor(value: &Node, ty: &str) -> bool {
    matches!(value, Node::FunctionCall(call) if call.name == ty)
}

impl TslEncoder {
    /// `const a = float( 1.0 ), b = vec3().toVar()`
    pub(super) fn emit_variables(&mut self, decl: &VariableDeclaration) -> String {
        let previous = std::mem::replace(&mut self.in_initializer, true);

        let mut bindings = Vec::with_capacity(decl.declarators.len());
        for declarator in &decl.declarators {
            bindings.push(self.emit_declarator(declarator));
        }
        for declarator in decl.declarators.iter().rev() {
            self.scope.add_import(&declarator.ty);
        }

        self.in_initializer = previous;
        format!("const {}", bindings.join(", "))
    }

    fn emit_declarator(&mut self, d: &Declarator) -> String {
        let mut code = match d.value.as_deref() {
            Some(value) => {
                let text = self.emit_expression(value);
                if is_own_constructor(value, &d.ty) {
                    format!("{} = {text}", d.name)
                } else {
                    format!("{} = {}( {text} )", d.name, d.ty)
                }
            }
            None => format!("{} = {}()", d.name, d.ty),
        };
        if d.mutable {
            code.push_str(".toVar()");
        }
        code
    }

    pub(super) fn emit_uniform(&mut self, u: &UniformDeclaration) -> String {
        self.scope.add_global(&u.name);

        let init = if self.options.reference {
            self.scope.add_import("reference");
            format!("reference( 'value', '{}', uniforms[ '{}' ] )", u.ty, u.name)
        } else if let Some((constructor, class)) = resource_uniform(&u.ty) {
            self.scope.add_import(constructor);
            format!("{constructor}( /* <{class}> */ )")
        } else {
            self.scope.add_import("uniform");
            format!("uniform( '{}' )", u.ty)
        };

        format!("const {} = {init}", u.name)
    }

    pub(super) fn emit_varying(&mut self, v: &VaryingDeclaration) -> String {
        self.scope.add_import("varying");
        self.scope.add_import(&v.ty);
        self.scope.add_global(&v.name);

        format!("const {name} = varying( {}(), '{name}' )", v.ty, name = v.name)
    }

    /// Emit a top-level function; `stmt_index` locates it within its overload group.
    ///
    /// The returned text carries its own `;\n` terminator, followed by the overload dispatcher when this is the
    /// last member of a group.
    pub(super) fn emit_function(&mut self, f: &FunctionDeclaration, stmt_index: usize) -> String {
        let mut params = Vec::with_capacity(f.params.len());
        let mut inputs = Vec::with_capacity(f.params.len() + 1);
        let mut bound = Vec::with_capacity(f.params.len() * 2);
        let mut shadows = Vec::new();
        let mut has_pointer = false;

        for param in &f.params {
            let mut name = param.name.clone();
            if param.is_pointer() {
                has_pointer = true;
            } else if param.mutable {
                name = format!("{}{IMMUTABLE_SUFFIX}", param.name);
                shadows.push(Node::VariableDeclaration(VariableDeclaration {
                    declarators: vec![Declarator {
                        name: param.name.clone(),
                        ty: param.ty.clone(),
                        value: Some(Box::new(Node::Accessor(Accessor { property: name.clone() }))),
                        mutable: true,
                    }],
                }));
            }

            inputs.push(format!("{}: '{}'", param.name, param.ty));
            bound.push(param.name.clone());
            bound.push(name.clone());
            params.push(name);
        }

        self.scope.enter_function(bound);
        let body = self.in_block(BlockKind::Function, |e| e.emit_body(shadows.iter().chain(&f.body)));
        self.scope.exit_function();

        let member = self.overloads.member(&f.name, stmt_index);
        let fn_name = match member {
            Some(m) => format!("{}_{}", f.name, m.index),
            None => f.name.clone(),
        };
        let prefix = self.export_prefix();
        let params = if params.is_empty() {
            String::new()
        } else {
            format!(" [ {} ] ", params.join(", "))
        };
        let tab = self.tab();

        let mut code = format!("{prefix}const {fn_name} = /*#__PURE__*/ Fn( ({params}) => {{\n\n{body}\n\n{tab}}}");
        if f.layout && !has_pointer {
            inputs.push(format!("return: '{}'", f.ty));
            code.push_str(&format!(" , {{ {} }}", inputs.join(", ")));
        }
        code.push_str(" );\n");

        self.scope.require("Fn");
        self.scope.add_global(&f.name);

        if let Some(m) = member.filter(|m| m.is_last()) {
            code.push('\n');
            code.push_str(&self.emit_overload_dispatcher(&f.name, m));
        }

        code
    }

    /// `const f = /*#__PURE__*/ overloadingFn( [ f_0, f_1 ] );`
    fn emit_overload_dispatcher(&mut self, name: &str, member: OverloadMember) -> String {
        self.scope.add_import("overloadingFn");
        let members = (0..member.group_len)
            .map(|idx| format!("{name}_{idx}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}const {name} = /*#__PURE__*/ overloadingFn( [ {members} ] );\n",
            self.export_prefix()
        )
    }

    fn export_prefix(&self) -> &'static str {
        if self.options.iife { "" } else { "export " }
    }
}

#[cfg(test)]
mod tests {
    use super::super::EncodeOptions;
    use super::*;
    use nodeshade_syntax::ast::{Parameter, Qualifier};
    use nodeshade_syntax::builders::*;

    fn imports(encoder: &TslEncoder) -> Vec<&str> {
        encoder.scope.imports().collect()
    }

    // ---- variables ----

    #[test]
    fn test_declaration_wraps_value_in_type() {
        let mut encoder = TslEncoder::default();
        let code = encoder.emit_expression(&let_("float", "a", Some(number("1.0"))));
        assert_eq!(code, "const a = float( 1.0 )");
        assert_eq!(imports(&encoder), vec!["float"]);
    }

    #[test]
    fn test_own_constructor_is_not_rewrapped() {
        let mut encoder = TslEncoder::default();
        let value = call("vec3", vec![number("1.0"), number("0.0"), number("0.0")]);
        let code = encoder.emit_expression(&var("vec3", "dir", Some(value)));
        assert_eq!(code, "const dir = vec3( 1.0, 0.0, 0.0 ).toVar()");
    }

    #[test]
    fn test_multiple_declarators_and_import_order() {
        let mut encoder = TslEncoder::default();
        let node = declaration(vec![
            declarator("float", "a", Some(call("sin", vec![accessor("t")]))),
            declarator("vec2", "b", None),
        ]);
        assert_eq!(encoder.emit_expression(&node), "const a = float( sin( t ) ), b = vec2()");
        assert_eq!(imports(&encoder), vec!["sin", "vec2", "float"]);
    }

    #[test]
    fn test_initializer_flag_is_scoped() {
        let mut encoder = TslEncoder::default();
        let node = let_("int", "j", Some(postfix("++", accessor("i"))));
        assert_eq!(encoder.emit_expression(&node), "const j = int( i.increment() )");
        assert!(!encoder.in_initializer);
    }

    // ---- uniforms and varyings ----

    #[test]
    fn test_uniform_forms() {
        let mut encoder = TslEncoder::default();
        assert_eq!(encoder.emit_expression(&uniform("float", "k")), "const k = uniform( 'float' )");
        assert_eq!(
            encoder.emit_expression(&uniform("texture", "map")),
            "const map = texture( /* <THREE.Texture> */ )"
        );
        assert_eq!(
            encoder.emit_expression(&uniform("cubeTexture", "env")),
            "const env = cubeTexture( /* <THREE.CubeTexture> */ )"
        );
        assert_eq!(
            encoder.emit_expression(&uniform("texture3D", "vol")),
            "const vol = texture3D( /* <THREE.Data3DTexture> */ )"
        );
        assert_eq!(imports(&encoder), vec!["uniform", "texture", "cubeTexture", "texture3D"]);
        assert_eq!(encoder.scope.globals().collect::<Vec<_>>(), vec!["k", "map", "env", "vol"]);
    }

    #[test]
    fn test_reference_uniform() {
        let mut encoder = TslEncoder::new(EncodeOptions::new().with_reference(true));
        assert_eq!(
            encoder.emit_expression(&uniform("vec3", "tint")),
            "const tint = reference( 'value', 'vec3', uniforms[ 'tint' ] )"
        );
        assert_eq!(imports(&encoder), vec!["reference"]);
    }

    #[test]
    fn test_varying() {
        let mut encoder = TslEncoder::default();
        assert_eq!(
            encoder.emit_expression(&varying("vec2", "vUv")),
            "const vUv = varying( vec2(), 'vUv' )"
        );
        assert_eq!(imports(&encoder), vec!["varying", "vec2"]);
    }

    // ---- functions ----

    #[test]
    fn test_function_with_layout() {
        let mut encoder = TslEncoder::default();
        let f = function(
            "addOne",
            "float",
            vec![param("float", "x")],
            vec![ret(Some(binary("+", accessor("x"), number("1"))))],
        );
        let Node::FunctionDeclaration(f) = f else { unreachable!() };
        assert_eq!(
            encoder.emit_function(&f, 0),
            "export const addOne = /*#__PURE__*/ Fn( ( [ x ] ) => {\n\n\treturn x.add( 1 );\n\n} , { x: 'float', return: 'float' } );\n"
        );
        assert_eq!(imports(&encoder), vec!["Fn"]);
    }

    #[test]
    fn test_function_without_params() {
        let mut encoder = TslEncoder::new(EncodeOptions::new().with_iife(true));
        let Node::FunctionDeclaration(f) = function("main", "void", vec![], vec![call("foo", vec![])]) else {
            unreachable!()
        };
        assert_eq!(
            encoder.emit_function(&f, 0),
            "const main = /*#__PURE__*/ Fn( () => {\n\n\tfoo();\n\n} , { return: 'void' } );\n"
        );
    }

    #[test]
    fn test_mutable_param_is_shadowed() {
        let mut encoder = TslEncoder::default();
        let p = Parameter {
            mutable: true,
            ..param("float", "x")
        };
        let body = vec![binary("+=", accessor("x"), number("1.0")), ret(Some(accessor("x")))];
        let Node::FunctionDeclaration(f) = function("bump", "float", vec![p], body) else {
            unreachable!()
        };
        assert_eq!(
            encoder.emit_function(&f, 0),
            "export const bump = /*#__PURE__*/ Fn( ( [ x_immutable ] ) => {\n\n\tconst x = float( x_immutable ).toVar();\n\tx.addAssign( 1.0 );\n\n\treturn x;\n\n} , { x: 'float', return: 'float' } );\n"
        );
    }

    #[test]
    fn test_pointer_param_suppresses_layout() {
        let mut encoder = TslEncoder::default();
        let p = Parameter {
            qualifier: Some(Qualifier::Inout),
            mutable: true,
            ..param("vec3", "acc")
        };
        let Node::FunctionDeclaration(f) = function("accumulate", "void", vec![p], vec![]) else {
            unreachable!()
        };
        assert_eq!(
            encoder.emit_function(&f, 0),
            "export const accumulate = /*#__PURE__*/ Fn( ( [ acc ] ) => {\n\n\n\n} );\n"
        );
    }

    #[test]
    fn test_layout_flag_off() {
        let mut encoder = TslEncoder::default();
        let Node::FunctionDeclaration(mut f) = function("f", "float", vec![param("float", "x")], vec![]) else {
            unreachable!()
        };
        f.layout = false;
        assert!(encoder.emit_function(&f, 0).ends_with("} );\n"));
    }

    #[test]
    fn test_params_shadow_library_names_only_inside_function() {
        let mut encoder = TslEncoder::default();
        let Node::FunctionDeclaration(f) = function(
            "shade",
            "vec3",
            vec![param("vec3", "normal"), param("vec3", "color")],
            vec![ret(Some(binary("*", accessor("color"), accessor("normal"))))],
        ) else {
            unreachable!()
        };
        encoder.emit_function(&f, 0);
        assert_eq!(imports(&encoder), vec!["Fn"]);

        encoder.emit_expression(&accessor("color"));
        assert_eq!(imports(&encoder), vec!["Fn", "color"]);
    }
}
