//! Spreadsheet writer
//!
//! Writes a record batch to a single-sheet workbook: a bold header row with
//! the column names, then one row per record, no index column.

use std::path::Path;
use std::time::Instant;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::util::ensure_parent_directory;
use crate::error::{Result, SpiroError};
use crate::utils::{log_operation_complete, log_operation_start};

/// Name of the only worksheet in the workbook
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Maximum number of rows in an xlsx worksheet, header included
const MAX_XLSX_ROWS: usize = 1_048_576;

fn downcast<'a, T: 'static>(array: &'a dyn Array, column: &str) -> Result<&'a T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        SpiroError::Validation(format!(
            "Column {column} could not be read as {:?}",
            array.data_type()
        ))
    })
}

fn write_column(
    worksheet: &mut Worksheet,
    col: u16,
    name: &str,
    array: &dyn Array,
) -> Result<()> {
    match array.data_type() {
        DataType::Float64 => {
            let values = downcast::<Float64Array>(array, name)?;
            for (row, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    worksheet.write_number(row as u32 + 1, col, v)?;
                }
            }
        }
        DataType::Int64 => {
            let values = downcast::<Int64Array>(array, name)?;
            for (row, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    worksheet.write_number(row as u32 + 1, col, v as f64)?;
                }
            }
        }
        DataType::Utf8 => {
            let values = downcast::<StringArray>(array, name)?;
            for (row, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    worksheet.write_string(row as u32 + 1, col, v)?;
                }
            }
        }
        other => {
            return Err(SpiroError::Validation(format!(
                "Unsupported column type for {name}: {other:?}"
            )));
        }
    }
    Ok(())
}

/// Write `batch` to an xlsx workbook at `path`, creating parent directories
pub fn write_batch_to_xlsx(batch: &RecordBatch, path: &Path) -> Result<()> {
    if batch.num_rows() + 1 > MAX_XLSX_ROWS {
        return Err(SpiroError::Validation(format!(
            "{} rows exceed the worksheet limit of {}",
            batch.num_rows(),
            MAX_XLSX_ROWS - 1
        )));
    }

    let start = Instant::now();
    log_operation_start("Writing workbook", path);
    ensure_parent_directory(path, "workbook output")?;

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(DEFAULT_SHEET_NAME)?;

    let schema = batch.schema();
    for (idx, field) in schema.fields().iter().enumerate() {
        let col = u16::try_from(idx).map_err(|_| {
            SpiroError::Validation(format!("Too many columns for a worksheet: {idx}"))
        })?;
        worksheet.write_string_with_format(0, col, field.name().as_str(), &header)?;
        write_column(worksheet, col, field.name(), batch.column(idx).as_ref())?;
    }

    workbook.save(path)?;
    log_operation_complete(
        "wrote",
        batch.num_rows(),
        Some(path),
        Some(start.elapsed()),
    );
    Ok(())
}
