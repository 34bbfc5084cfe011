//! Spirometry physiology
//!
//! Pure functions turning a patient's demographics into a simulated forced
//! exhalation and the clinical metrics derived from it. Nothing here draws
//! random numbers.

use crate::config::{CohortParameters, GeneratorConfig};
use crate::models::{Demographics, PatientRecord, Sex, SpirometryCurve};

/// Evenly spaced sample times of a forced exhalation
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    /// Sample times in seconds, from 0 to `total_time` inclusive
    pub times: Vec<f64>,
    /// Total duration in seconds
    pub total_time: f64,
    /// Interval between samples in seconds
    pub dt: f64,
}

impl TimeGrid {
    /// Build a grid of `num_points` samples over `total_time` seconds
    #[must_use]
    pub fn new(total_time: f64, num_points: usize) -> Self {
        let last = num_points.saturating_sub(1).max(1) as f64;
        let times = (0..num_points)
            .map(|i| i as f64 / last * total_time)
            .collect();
        Self {
            times,
            total_time,
            dt: total_time / last,
        }
    }

    /// Grid described by a generator configuration
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.total_time, config.num_points)
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the grid has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Predicted FVC in liters from age and sex
#[must_use]
pub fn predicted_fvc(params: &CohortParameters, age: f64, sex: Sex) -> f64 {
    let intercept = match sex {
        Sex::Male => params.male_fvc_intercept,
        Sex::Female => params.female_fvc_intercept,
    };
    intercept - params.fvc_decline_per_year * (age - params.reference_age)
}

/// Measured FVC in liters: the predicted value scaled by the sampled factor
#[must_use]
pub fn actual_fvc(params: &CohortParameters, demographics: &Demographics) -> f64 {
    predicted_fvc(params, demographics.age, demographics.sex) * demographics.fvc_factor
}

/// Exhalation time constant `k` in 1/s
#[must_use]
pub fn time_constant(params: &CohortParameters, copd: bool) -> f64 {
    if copd {
        params.copd_time_constant
    } else {
        params.healthy_time_constant
    }
}

/// Simulate the exhaled volume curve.
///
/// `V(t) = FVC_mL * (1 - e^(-k t)) / (1 - e^(-k))`. The normaliser is taken at
/// the normalised end of the test (time ratio 1), so the last samples sit at
/// or marginally above `fvc_ml`.
#[must_use]
pub fn simulate_curve(fvc_ml: f64, k: f64, grid: &TimeGrid) -> SpirometryCurve {
    let norm = 1.0 - (-k).exp();
    let volume_ml: Vec<f64> = grid
        .times
        .iter()
        .map(|&t| fvc_ml * (1.0 - (-k * t).exp()) / norm)
        .collect();
    let rounded_ml = volume_ml.iter().map(|v| v.round() as i64).collect();

    SpirometryCurve {
        volume_ml,
        rounded_ml,
    }
}

/// FEV1 in liters, read from the unrounded curve at `index`
#[must_use]
pub fn fev1(curve: &SpirometryCurve, index: usize) -> f64 {
    curve
        .volume_ml
        .get(index)
        .or_else(|| curve.volume_ml.last())
        .copied()
        .unwrap_or(0.0)
        / 1000.0
}

/// Peak expiratory flow in L/min.
///
/// Maximum of the discrete derivative of the rounded curve (mL/s), converted
/// to L/min.
#[must_use]
pub fn peak_expiratory_flow(curve: &SpirometryCurve, dt: f64) -> f64 {
    let peak_ml_s = curve
        .rounded_ml
        .windows(2)
        .map(|w| (w[1] - w[0]) as f64 / dt)
        .fold(f64::NEG_INFINITY, f64::max);

    if peak_ml_s.is_finite() {
        peak_ml_s * 60.0 / 1000.0
    } else {
        0.0
    }
}

/// Derive a full patient record from sampled demographics
#[must_use]
pub fn derive_record(
    params: &CohortParameters,
    demographics: &Demographics,
    grid: &TimeGrid,
    fev1_index: usize,
) -> PatientRecord {
    let fvc = actual_fvc(params, demographics);
    let k = time_constant(params, demographics.copd);
    let curve = simulate_curve(fvc * 1000.0, k, grid);

    PatientRecord {
        age: demographics.age,
        sex: demographics.sex,
        smoking: demographics.smoking,
        copd: demographics.copd,
        fvc,
        fev1: fev1(&curve, fev1_index),
        pef: peak_expiratory_flow(&curve, grid.dt),
        flow: curve.rounded_ml,
    }
}
