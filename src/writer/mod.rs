//! Output writers for generated tables

pub mod xlsx;

pub use xlsx::{DEFAULT_SHEET_NAME, write_batch_to_xlsx};
