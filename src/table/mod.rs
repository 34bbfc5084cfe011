//! In-memory table of generated records
//!
//! The cohort is assembled into a single Arrow `RecordBatch` whose columns are
//! the workbook columns, in workbook order.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::PatientRecord;

/// Column names in output order
pub const COLUMN_NAMES: [&str; 8] = ["age", "sex", "smoking", "COPD", "FVC", "FEV1", "PEF", "flow"];

/// Arrow schema of the spirometry table
#[must_use]
pub fn spirometry_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("age", DataType::Float64, false),
        Field::new("sex", DataType::Int64, false),
        Field::new("smoking", DataType::Int64, false),
        Field::new("COPD", DataType::Int64, false),
        Field::new("FVC", DataType::Float64, false),
        Field::new("FEV1", DataType::Float64, false),
        Field::new("PEF", DataType::Float64, false),
        Field::new("flow", DataType::Utf8, false),
    ]))
}

/// Build a record batch from generated patients
pub fn records_to_batch(records: &[PatientRecord]) -> Result<RecordBatch> {
    let floats = |f: fn(&PatientRecord) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(records.iter().map(f)))
    };
    let ints = |f: fn(&PatientRecord) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(records.iter().map(f)))
    };

    let flow: ArrayRef = Arc::new(StringArray::from(
        records
            .iter()
            .map(PatientRecord::flow_string)
            .collect::<Vec<_>>(),
    ));

    let columns = vec![
        floats(|r| r.age),
        ints(|r| r.sex.code()),
        ints(|r| i64::from(r.smoking)),
        ints(|r| i64::from(r.copd)),
        floats(|r| r.fvc),
        floats(|r| r.fev1),
        floats(|r| r.pef),
        flow,
    ];

    Ok(RecordBatch::try_new(spirometry_schema(), columns)?)
}
