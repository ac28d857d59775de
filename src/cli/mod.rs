//! CLI module for enumgen
//!
//! A thin shell around the semantic core, mostly useful for inspecting how a comment will be read.
//!
//! ## Commands
//!
//! - `fields <COMMENT>` - Show the delimiters and field specs of a type comment
//! - `values <LITERALS> --spec <COMMENT>` - Resolve member literals against a type comment
//! - `aliases <RAW>` - Show a parsed alias list
//! - `convert <TYPE> <LITERAL>` - Convert one literal
//! - `case <WORD>` - Show every casing variant of an identifier
//! - `draft <FILE>` - Draft a JSON file of front-end declarations and print the drafts as JSON
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

use crate::config::GenerateConfig;
use crate::version::ENUMGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
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
    /// Create a new CLI error with a message and exit code.
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

/// Typed enum drafting from comment-embedded constant metadata
#[derive(Parser, Debug)]
#[command(name = "enumgen")]
#[command(version = ENUMGEN_VERSION)]
#[command(about = "Typed enum drafting from comment-embedded constant metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the delimiters and field specs of a type comment
    Fields {
        #[arg(value_name = "COMMENT")]
        comment: String,
    },

    /// Resolve a member's literals against the fields of a type comment
    Values {
        #[arg(value_name = "LITERALS")]
        literals: String,
        /// Type comment declaring the fields
        #[arg(long, value_name = "COMMENT")]
        spec: String,
    },

    /// Show a parsed alias list
    Aliases {
        #[arg(value_name = "RAW")]
        raw: String,
    },

    /// Convert one literal into a field type
    Convert {
        /// Type token, e.g. `int8` or `time.Duration`
        #[arg(value_name = "TYPE")]
        type_token: String,
        #[arg(value_name = "LITERAL", allow_hyphen_values = true)]
        literal: String,
    },

    /// Show every casing variant of an identifier
    Case {
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Draft front-end declarations (JSON) and print the drafts as JSON
    Draft {
        /// JSON file holding an array of type declarations, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Skip members that fail to resolve instead of aborting
        #[arg(long)]
        no_failfast: bool,
        /// Positional index of the first member
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start_index: i64,
    },
}

impl Cli {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Generation settings selected by the global flags and, for `draft`, its own flags.
    pub fn generate_config(&self) -> GenerateConfig {
        let config = GenerateConfig::new().with_verbose(self.verbose);
        match &self.command {
            Command::Draft {
                no_failfast,
                start_index,
                ..
            } => config.with_failfast(!no_failfast).with_start_index(*start_index),
            _ => config,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
    match execute(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
fn execute(cli: Cli) -> CliResult<String> {
    let config = cli.generate_config();
    match cli.command {
        Command::Fields { comment } => Ok(commands::render_fields(&comment)),
        Command::Values { literals, spec } => commands::render_values(&literals, &spec),
        Command::Aliases { raw } => Ok(commands::render_aliases(&raw)),
        Command::Convert { type_token, literal } => commands::render_convert(&type_token, &literal),
        Command::Case { word } => Ok(commands::render_case(&word)),
        Command::Draft { file, .. } => commands::draft_file(&file, &config),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_fields() {
        let cli = Cli::try_parse_from(["enumgen", "fields", "Name[string], Age[int]"]).unwrap();
        assert!(matches!(cli.command, Command::Fields { .. }));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_values_with_spec() {
        let cli = Cli::try_parse_from(["enumgen", "values", "1,true", "--spec", "A[int],B[bool]"]).unwrap();
        if let Command::Values { literals, spec } = cli.command {
            assert_eq!(literals, "1,true");
            assert_eq!(spec, "A[int],B[bool]");
        } else {
            panic!("Expected Values command");
        }
    }

    #[test]
    fn test_cli_parse_convert_negative_literal() {
        let cli = Cli::try_parse_from(["enumgen", "convert", "int8", "-5"]).unwrap();
        if let Command::Convert { type_token, literal } = cli.command {
            assert_eq!(type_token, "int8");
            assert_eq!(literal, "-5");
        } else {
            panic!("Expected Convert command");
        }
    }

    #[test]
    fn test_cli_parse_draft_flags() {
        let cli = Cli::try_parse_from([
            "enumgen",
            "draft",
            "decls.json",
            "--no-failfast",
            "--start-index",
            "-1",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        if let Command::Draft {
            file,
            no_failfast,
            start_index,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("decls.json"));
            assert!(no_failfast);
            assert_eq!(start_index, -1);
        } else {
            panic!("Expected Draft command");
        }
    }

    #[test]
    fn test_generate_config_from_flags() {
        let cli = Cli::try_parse_from(["enumgen", "-v", "draft", "-", "--no-failfast", "--start-index", "3"]).unwrap();
        let config = cli.generate_config();
        assert!(config.verbose);
        assert_eq!(config.log_filter(), "debug");
        assert!(!config.failfast);
        assert_eq!(config.start_index, 3);

        let cli = Cli::try_parse_from(["enumgen", "case", "planet"]).unwrap();
        let config = cli.generate_config();
        assert_eq!(config.log_filter(), "info");
        assert!(config.failfast);
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["enumgen"]).is_err());
    }
}
