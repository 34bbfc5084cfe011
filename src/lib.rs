//! Synthetic spirometry data for COPD classification.
//!
//! Samples a patient cohort, simulates a forced exhalation for each patient,
//! derives FVC, FEV1 and PEF, and writes the table to an xlsx workbook.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod table;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::{CohortParameters, GeneratorConfig};
pub use error::{Result, SpiroError};
pub use models::{PatientRecord, Sex};
pub use pipeline::{build_table, run};

// Arrow types
pub use arrow::record_batch::RecordBatch;
