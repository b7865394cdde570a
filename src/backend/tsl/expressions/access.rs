//! Accessor-chain lowering (`a.b[ i ].c`).

use nodeshade_core::lang::literals::is_primitive_literal;
use nodeshade_syntax::ast::{AccessorChain, Element};

use super::super::TslEncoder;

impl TslEncoder {
    /// Literal indices keep bracket syntax; computed indices become `.element( … )`.
    pub(super) fn emit_accessor_chain(&mut self, chain: &AccessorChain) -> String {
        let mut code = self.emit_expression(&chain.object);

        for element in &chain.elements {
            match element {
                Element::Static { value } => {
                    code.push('.');
                    code.push_str(&self.emit_expression(value));
                }
                Element::Dynamic { value } => {
                    let index = self.emit_expression(value);
                    if is_primitive_literal(&index) {
                        code.push_str(&format!("[ {index} ]"));
                    } else {
                        code.push_str(&format!(".element( {index} )"));
                    }
                }
            }
        }

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeshade_syntax::builders::*;

    #[test]
    fn test_static_and_literal_index() {
        let mut encoder = TslEncoder::default();
        let node = chain(accessor("lights"), vec![index(number("0")), field("color")]);
        assert_eq!(encoder.emit_expression(&node), "lights[ 0 ].color");
    }

    #[test]
    fn test_computed_index_uses_element() {
        let mut encoder = TslEncoder::default();
        let node = chain(accessor("weights"), vec![index(accessor("i"))]);
        assert_eq!(encoder.emit_expression(&node), "weights.element( i )");
    }

    #[test]
    fn test_builtin_root_is_imported() {
        let mut encoder = TslEncoder::default();
        let node = chain(accessor("uv"), vec![field("x")]);
        assert_eq!(encoder.emit_expression(&node), "uv.x");
        assert_eq!(encoder.scope.imports().collect::<Vec<_>>(), vec!["uv"]);
    }
}
