//! Function-call lowering, including resource sampling.

use nodeshade_core::lang::sampling::{self, SampleModifier};
use nodeshade_syntax::ast::FunctionCall;

use super::super::TslEncoder;

impl TslEncoder {
    pub(super) fn emit_call(&mut self, call: &FunctionCall) -> String {
        let args: Vec<String> = call.params.iter().map(|p| self.emit_expression(p)).collect();

        if let Some(code) = sample_chain(&call.name, &args) {
            return code;
        }

        self.scope.add_import(&call.name);
        if args.is_empty() {
            format!("{}()", call.name)
        } else {
            format!("{}( {} )", call.name, args.join(", "))
        }
    }
}

/// `tex.sample( uv )` plus the modifier the sampling call implies.
///
/// Returns `None` for non-sampling calls and for sampling calls with too few arguments, which then lower as
/// ordinary calls.
fn sample_chain(name: &str, args: &[String]) -> Option<String> {
    let info = sampling::info_for(sampling::from_str(name)?);
    if args.len() < info.min_args {
        tracing::debug!(name, args = args.len(), "sampling call is short of arguments; emitting a plain call");
        return None;
    }

    let mut code = format!("{}.sample( {} )", args[0], args[1]);
    match info.modifier {
        SampleModifier::OptionalBias => {
            if let Some(bias) = args.get(2) {
                code.push_str(&format!(".bias( {bias} )"));
            }
        }
        SampleModifier::Level => code.push_str(&format!(".level( {} )", args[2])),
        SampleModifier::Grad => code.push_str(&format!(".grad( {}, {} )", args[2], args[3])),
        SampleModifier::NoInterpolation => code.push_str(".setSampler( false )"),
    }
    Some(code)
}
