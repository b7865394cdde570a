//! Document assembly: statement sequencing, the provenance header, imports, and the closure wrapper.

use nodeshade_core::TSL_MODULE;
use nodeshade_syntax::{Node, Program};

use super::errors::EmitDiagnostic;
use super::scope::OverloadTable;
use super::statements::extra_line;
use super::TslEncoder;

/// Result of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The complete TSL document
    pub code: String,
    /// Non-fatal problems, in the order they were found
    pub diagnostics: Vec<EmitDiagnostic>,
}

impl Encoded {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl TslEncoder {
    /// Generate the full document for `program`.
    #[tracing::instrument(skip_all, fields(stmt_count = program.body.len(), iife = self.options.iife))]
    pub fn encode(mut self, program: &Program) -> Encoded {
        self.overloads = OverloadTable::build(&program.body);

        let body = self.emit_top_level(&program.body);
        let code = self.assemble(&body);

        tracing::debug!(
            imports = self.scope.imports().count(),
            globals = self.scope.globals().count(),
            diagnostics = self.diagnostics.len(),
            "tsl document generated"
        );

        Encoded {
            code,
            diagnostics: self.diagnostics,
        }
    }

    fn emit_top_level(&mut self, body: &[Node]) -> String {
        let mut code = String::from("\n");
        if self.options.iife {
            self.indent += 1;
        }

        let mut previous: Option<&Node> = None;
        for (idx, statement) in body.iter().enumerate() {
            code.push_str(extra_line(previous, statement));
            code.push_str(&self.tab());
            match statement {
                // Functions carry their own terminator
                Node::FunctionDeclaration(f) => code.push_str(&self.emit_function(f, idx)),
                other => {
                    code.push_str(&self.emit_expression(other));
                    code.push_str(";\n");
                }
            }
            previous = Some(statement);
        }

        code
    }

    fn assemble(&self, body: &str) -> String {
        let imports = self.scope.imports().collect::<Vec<_>>();
        let globals = self.scope.globals().collect::<Vec<_>>();

        let mut header = format!("// Three.js Transpiler r{}\n\n", self.options.revision);
        let mut footer = String::new();

        if self.options.iife {
            header.push_str("( function ( TSL, uniforms ) {\n\n");
            if !imports.is_empty() {
                header.push_str(&format!("\tconst {{ {} }} = TSL;\n", imports.join(", ")));
            }
            if !globals.is_empty() {
                footer.push_str(&format!("\treturn {{ {} }};\n", globals.join(", ")));
            }
            footer.push_str("\n} );");
        } else if !imports.is_empty() {
            header.push_str(&format!("import {{ {} }} from '{TSL_MODULE}';\n", imports.join(", ")));
        }

        format!("{header}{body}{footer}")
    }
}
