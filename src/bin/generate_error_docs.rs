//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `SolverError`, `GridError`, `DictionaryError` and
//! `OracleError` implementations via their `code()`, `description()`,
//! `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use wordgrid::errors::{DictionaryError, GridError, OracleError};
use wordgrid::solver::SolverError;

/// The documentation surface every error type in the crate exposes.
trait ErrorDoc: std::fmt::Display {
    fn code(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn details(&self) -> &'static str;
    fn help(&self) -> Option<&'static str>;
    fn display_detailed(&self) -> String;
}

macro_rules! impl_error_doc {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ErrorDoc for $ty {
                fn code(&self) -> &'static str { <$ty>::code(self) }
                fn description(&self) -> &'static str { <$ty>::description(self) }
                fn details(&self) -> &'static str { <$ty>::details(self) }
                fn help(&self) -> Option<&'static str> { <$ty>::help(self) }
                fn display_detailed(&self) -> String { <$ty>::display_detailed(self) }
            }
        )+
    };
}

impl_error_doc!(SolverError, GridError, DictionaryError, OracleError);

fn fenced(out: &mut String, label: &str, body: &str) {
    let _ = writeln!(out, "{label}\n```\n{body}\n```\n");
}

/// One `###` section per variant: summary line, details, fix hint, and both message forms.
fn render_section<E: ErrorDoc>(title: &str, blurb: &str, errors: &[E]) -> String {
    let mut out = format!("## {title}\n\n{blurb}\n\n");
    for error in errors {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());
        if let Some(help) = error.help() {
            fenced(&mut out, "**How to fix:**", help);
        }
        fenced(&mut out, "**Example error message:**", &error.to_string());
        fenced(&mut out, "**Detailed format:**", &error.display_detailed());
        out.push_str("---\n\n");
    }
    out
}

fn example_io_error() -> DictionaryError {
    DictionaryError::Io {
        path: PathBuf::from("data/words.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::Grid(GridError::SizeMismatch { rows: 4, cols: 4, expected: 16, actual: 15 }),
        SolverError::Dictionary(example_io_error()),
    ]
}

/// Helper to create all `GridError` variants for documentation
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::SizeMismatch { rows: 4, cols: 4, expected: 16, actual: 15 },
        GridError::EmptyDimensions { rows: 0, cols: 4 },
        GridError::NotSquare { len: 15 },
        GridError::TooLarge { rows: usize::MAX, cols: 2 },
    ]
}

/// Helper to create all `DictionaryError` variants for documentation
fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        example_io_error(),
        DictionaryError::Empty { name: "data/words.txt".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S002)](#solver-errors)");
    println!("- [Grid Errors (G001–G004)](#grid-errors)");
    println!("- [Dictionary Errors (D001–D002)](#dictionary-errors)");
    println!("- [Oracle Errors (O001)](#oracle-errors)\n");

    print!(
        "{}",
        render_section(
            "Solver Errors",
            "Top-level errors from the convenience entry points and the CLI. These wrap grid or dictionary errors.",
            &all_solver_error_variants(),
        )
    );
    print!(
        "{}",
        render_section(
            "Grid Errors",
            "Errors that occur when laying out the input letters as a grid.",
            &all_grid_error_variants(),
        )
    );
    print!(
        "{}",
        render_section(
            "Dictionary Errors",
            "Errors that occur when loading a word list.",
            &all_dictionary_error_variants(),
        )
    );
    print!(
        "{}",
        render_section(
            "Oracle Errors",
            "Raised by fallible prefix oracles. These never stop a search: only the affected branch is skipped.",
            &[OracleError::new("qu", "lookup service unavailable")],
        )
    );
}
