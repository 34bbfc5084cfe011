//! Cohort generation
//!
//! Sampling runs sequentially on a single RNG so a seed fully determines the
//! cohort. Curve simulation is pure and runs on rayon; `collect` keeps the
//! sampling order.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::algorithm::demographics::sample_demographics;
use crate::algorithm::spirometry::{TimeGrid, derive_record};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{Demographics, PatientRecord};
use crate::utils::{create_main_progress_bar, finish_progress_bar, log_operation_complete};

/// Build the RNG described by the configuration
#[must_use]
pub fn create_rng(config: &GeneratorConfig) -> StdRng {
    match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a cohort using the RNG implied by `config.random_seed`
pub fn generate_cohort(config: &GeneratorConfig) -> Result<Vec<PatientRecord>> {
    let mut rng = create_rng(config);
    generate_cohort_with_rng(config, &mut rng)
}

/// Generate a cohort drawing all randomness from `rng`
pub fn generate_cohort_with_rng<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<PatientRecord>> {
    config.validate()?;
    let start = Instant::now();

    let pb = create_main_progress_bar(
        config.n_patients as u64,
        Some("Sampling patients"),
        config.show_progress,
    );
    let demographics: Vec<Demographics> = (0..config.n_patients)
        .map(|_| {
            let d = sample_demographics(rng, &config.cohort);
            pb.inc(1);
            d
        })
        .collect();
    finish_progress_bar(&pb, Some("Sampling complete"));

    let grid = TimeGrid::from_config(config);
    let fev1_index = config.fev1_index();
    log::debug!(
        "Simulating {} curves over {} points, FEV1 at index {} ({:.2} s)",
        demographics.len(),
        grid.len(),
        fev1_index,
        grid.times[fev1_index]
    );

    let records: Vec<PatientRecord> = demographics
        .par_iter()
        .map(|d| derive_record(&config.cohort, d, &grid, fev1_index))
        .collect();

    log_operation_complete("generated", records.len(), None, Some(start.elapsed()));
    Ok(records)
}
