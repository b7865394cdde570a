//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use nodeshade_core::lang::library::{self, SymbolKind};
use nodeshade_syntax::json;

use super::{CliError, CliResult, ExitCode};
use crate::backend::{EncodeOptions, TslEncoder};

/// Maximum AST file size accepted (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read an input file, rejecting files above `MAX_SOURCE_SIZE`.
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Input file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Generate the TSL document for a JSON AST file.
///
/// Generation warnings are rendered to stderr; they never fail the command.
pub fn emit_file(file_path: &Path, options: &EncodeOptions, output: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = json::from_json(&source)
        .map_err(|e| CliError::failure(format!("Invalid AST in '{}': {}", file_path.display(), e)))?;

    let encoded = TslEncoder::new(options.clone()).encode(&program);
    for diagnostic in encoded.diagnostics {
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }

    write_document(&encoded.code, output, &mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Write the document to `output`, or to `stdout` when no path is given. Both receive identical bytes.
fn write_document(code: &str, output: Option<&Path>, stdout: &mut impl Write) -> CliResult<()> {
    match output {
        Some(path) => {
            fs::write(path, code)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), bytes = code.len(), "wrote TSL document");
        }
        None => stdout
            .write_all(code.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?,
    }
    Ok(())
}

/// List library symbols, optionally restricted to a name prefix.
pub fn list_symbols(filter: Option<&str>) -> CliResult<ExitCode> {
    let prefix = filter.unwrap_or("");
    for info in library::SYMBOLS.iter().filter(|info| info.name.starts_with(prefix)) {
        println!("{:<20} {}", info.name, kind_label(info.kind));
    }
    Ok(ExitCode::SUCCESS)
}

fn kind_label(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::ControlFlow => "control-flow",
        SymbolKind::Constructor => "constructor",
        SymbolKind::Operator => "operator",
        SymbolKind::Math => "math",
        SymbolKind::Resource => "resource",
        SymbolKind::Input => "input",
    }
}
