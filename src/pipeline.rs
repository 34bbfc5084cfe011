//! End-to-end generation pipeline
//!
//! sample → simulate → validate → summarise → tabulate → write.

use arrow::record_batch::RecordBatch;

use crate::algorithm::{CohortStats, generate_cohort, validate_cohort};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::table::records_to_batch;
use crate::writer::write_batch_to_xlsx;

/// Generate a validated cohort table without touching the filesystem
pub fn build_table(config: &GeneratorConfig) -> Result<(RecordBatch, CohortStats)> {
    let records = generate_cohort(config)?;
    validate_cohort(&records, config)?;

    let stats = CohortStats::calculate(&records);
    let batch = records_to_batch(&records)?;
    Ok((batch, stats))
}

/// Generate a cohort and write it to `config.output_path`
pub fn run(config: &GeneratorConfig) -> Result<CohortStats> {
    log::info!("{config}");

    let (batch, stats) = build_table(config)?;
    log::info!("{stats}");

    write_batch_to_xlsx(&batch, &config.output_path)?;
    Ok(stats)
}
