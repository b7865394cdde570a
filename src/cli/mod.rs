//! CLI module for nodeshade
//!
//! ## Commands
//!
//! - `emit <FILE.json>` - Generate a TSL document from a JSON AST
//! - `symbols` - List the TSL symbol library known to the generator
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use nodeshade_core::THREE_REVISION;

use crate::version::NODESHADE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Shading-language AST to TSL code generator
#[derive(Parser, Debug)]
#[command(name = "nodeshade")]
#[command(version = NODESHADE_VERSION)]
#[command(about = "Generate Three.js Shading Language (TSL) from a shader AST", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a TSL document from a JSON AST
    Emit {
        /// JSON AST file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Wrap the output in a closure that receives TSL and a uniforms store
        #[arg(long)]
        iife: bool,
        /// Bind uniforms to the external uniforms store
        #[arg(long)]
        reference: bool,
        /// Three.js revision shown in the header
        #[arg(long, value_name = "REV", default_value = THREE_REVISION)]
        revision: String,
        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// List the TSL symbol library
    Symbols {
        /// Only list names starting with this prefix
        #[arg(long, value_name = "PREFIX")]
        filter: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Emit {
            file,
            iife,
            reference,
            revision,
            output,
        } => {
            let options = crate::EncodeOptions::new()
                .with_iife(iife)
                .with_reference(reference)
                .with_revision(revision);
            commands::emit_file(&file, &options, output.as_deref())
        }
        Command::Symbols { filter } => commands::list_symbols(filter.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================
