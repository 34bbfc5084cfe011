//! Demographic sampling
//!
//! Draws every random quantity a patient needs from a caller-supplied RNG.

use std::ops::Range;

use rand::Rng;

use crate::config::CohortParameters;
use crate::models::{Demographics, Sex};

/// Largest float strictly below `x`, for finite `x`
fn float_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

/// Uniform draw from the half-open `range`.
///
/// Float `random_range` may return `range.end` itself; such draws are moved to
/// the largest float below it.
pub fn sample_half_open<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    let value = rng.random_range(range.clone());
    if value >= range.end {
        float_below(range.end).max(range.start)
    } else {
        value
    }
}

/// Sample one patient's demographics, disease label and FVC factor
pub fn sample_demographics<R: Rng>(rng: &mut R, params: &CohortParameters) -> Demographics {
    let age = sample_half_open(rng, &params.age_range);
    let sex = Sex::from_male_flag(rng.random_bool(params.male_probability));
    let smoking = rng.random_bool(params.smoking_probability);
    let copd = rng.random_bool(params.copd_probability(smoking));

    let factor_range = if copd {
        &params.copd_fvc_factor
    } else {
        &params.healthy_fvc_factor
    };
    let fvc_factor = sample_half_open(rng, factor_range);

    Demographics {
        age,
        sex,
        smoking,
        copd,
        fvc_factor,
    }
}

/// Sample demographics for `n` patients in order
pub fn sample_many<R: Rng>(
    rng: &mut R,
    params: &CohortParameters,
    n: usize,
) -> Vec<Demographics> {
    (0..n).map(|_| sample_demographics(rng, params)).collect()
}
