//! Error types for grid construction, prefix oracles and dictionary loading.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - G001: `SizeMismatch` (Input length does not match the grid dimensions)
//! - G002: `EmptyDimensions` (Grid has zero rows or zero columns)
//! - G003: `NotSquare` (Square grid requested from a non-square letter count)
//! - O001: `OracleError` (A prefix oracle failed to answer a query)
//! - D001: `DictionaryError::Io` (Dictionary file could not be read)
//! - D002: `DictionaryError::Empty` (Dictionary has no usable entries)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::GridError;
//! use wordgrid::grid::Grid;
//!
//! match Grid::new("abcde", 2, 2) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, GridError::SizeMismatch { expected: 4, actual: 5, .. }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Failure to build a [`Grid`](crate::grid::Grid) from its input letters.
///
/// Construction is all-or-nothing: no partial grid is produced on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid of {rows}x{cols} needs {expected} letters but got {actual}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("cannot lay out {len} letters as a square grid")]
    NotSquare { len: usize },

    #[error("grid of {rows}x{cols} has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::SizeMismatch { .. } => "G001",
            GridError::EmptyDimensions { .. } => "G002",
            GridError::NotSquare { .. } => "G003",
            GridError::TooLarge { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::SizeMismatch { .. } => "Input length does not match the grid dimensions",
            GridError::EmptyDimensions { .. } => "Grid has zero rows or zero columns",
            GridError::NotSquare { .. } => "Square grid requested from a non-square letter count",
            GridError::TooLarge { .. } => "Grid dimensions overflow the cell count",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::SizeMismatch { .. } => "The grid is filled row-major from a flat string, one letter per cell. The string must contain exactly rows*cols characters.",
            GridError::EmptyDimensions { .. } => "A grid needs at least one cell to search. Both the row count and the column count must be at least 1.",
            GridError::NotSquare { .. } => "When no dimensions are given, the grid is assumed to be n x n, so the number of letters must be a perfect square (1, 4, 9, 16, ...).",
            GridError::TooLarge { .. } => "The product rows*cols does not fit in a machine word, so no input string could ever fill the grid.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::SizeMismatch { .. } => Some("Example: a 2x3 grid takes 6 letters, e.g. 'abcdef' for rows 'abc' / 'def'"),
            GridError::EmptyDimensions { .. } => Some("Use at least --rows 1 --cols 1"),
            GridError::NotSquare { .. } => Some("Pass --rows and --cols explicitly for rectangular grids"),
            GridError::TooLarge { .. } => Some("Check --rows and --cols; their product must equal the number of letters"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A prefix oracle could not answer a query.
///
/// The search treats this as local to one branch: the branch rooted at
/// `candidate` is abandoned, everything else keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("prefix oracle failed on \"{candidate}\": {reason}")]
pub struct OracleError {
    pub candidate: String,
    pub reason: String,
}

impl OracleError {
    pub fn new(candidate: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        "O001"
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        "A prefix oracle failed to answer a query"
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        "The dictionary lookup for one candidate word failed. Only the search branch for that candidate is abandoned; the rest of the grid is still searched."
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        None
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure to load a [`Dictionary`](crate::dictionary::Dictionary).
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary '{name}' has no usable entries")]
    Empty { name: String },
}

impl DictionaryError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::Empty { .. } => "D002",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Dictionary file could not be read",
            DictionaryError::Empty { .. } => "Dictionary has no usable entries",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "The dictionary file is missing, unreadable, or not valid UTF-8.",
            DictionaryError::Empty { .. } => "Every line of the dictionary was blank, malformed, or scored below the minimum score, so there is nothing to search for.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Io { .. } => Some("Check the --dictionary path; each line should be 'word' or 'word;score'"),
            DictionaryError::Empty { .. } => Some("Lower --min-score or check the file format ('word' or 'word;score' per line)"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
