//! Error handling for the spirometry generator.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use rust_xlsxwriter::XlsxError;

/// Errors that can occur while generating or persisting a cohort
#[derive(Debug, thiserror::Error)]
pub enum SpiroError {
    /// Error opening or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error assembling the in-memory table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing the spreadsheet
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generated record broke one of the cohort invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// The output directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying cause
        source: io::Error,
    },
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, SpiroError>;
