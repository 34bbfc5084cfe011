//! Validation of generated records
//!
//! Checks every record against the cohort invariants before it is written.

use crate::algorithm::spirometry::predicted_fvc;
use crate::config::GeneratorConfig;
use crate::error::{Result, SpiroError};
use crate::models::PatientRecord;

/// Validate a single record against the configured cohort
pub fn validate_record(record: &PatientRecord, config: &GeneratorConfig) -> Result<()> {
    let params = &config.cohort;

    if !params.age_range.contains(&record.age) {
        return Err(SpiroError::Validation(format!(
            "age {} outside {:?}",
            record.age, params.age_range
        )));
    }

    if record.flow.len() != config.num_points {
        return Err(SpiroError::Validation(format!(
            "flow has {} points, expected {}",
            record.flow.len(),
            config.num_points
        )));
    }

    if record.flow.first().is_some_and(|&v| v < 0) {
        return Err(SpiroError::Validation(
            "flow starts below zero".to_string(),
        ));
    }

    if let Some(pos) = record.flow.windows(2).position(|w| w[1] < w[0]) {
        return Err(SpiroError::Validation(format!(
            "flow decreases between points {} and {}",
            pos,
            pos + 1
        )));
    }

    let factors = if record.copd {
        &params.copd_fvc_factor
    } else {
        &params.healthy_fvc_factor
    };
    let predicted_ml = predicted_fvc(params, record.age, record.sex) * 1000.0;
    let (low, high) = (factors.start * predicted_ml, factors.end * predicted_ml);
    // Relative slack for floating point noise at the factor bounds
    let slack = 1e-9 * predicted_ml.abs();
    if record.fvc_ml() < low - slack || record.fvc_ml() > high + slack {
        return Err(SpiroError::Validation(format!(
            "FVC {:.1} mL outside [{low:.1}, {high:.1}] for COPD={}",
            record.fvc_ml(),
            record.copd
        )));
    }

    Ok(())
}

/// Validate every record, reporting the first offending row
pub fn validate_cohort(records: &[PatientRecord], config: &GeneratorConfig) -> Result<()> {
    if records.len() != config.n_patients {
        return Err(SpiroError::Validation(format!(
            "cohort has {} records, expected {}",
            records.len(),
            config.n_patients
        )));
    }

    for (row, record) in records.iter().enumerate() {
        validate_record(record, config)
            .map_err(|e| SpiroError::Validation(format!("row {row}: {e}")))?;
    }

    Ok(())
}
