//! Configuration for cohort generation.
//!
//! All values are fixed constants exposed through `Default`; nothing is read
//! from files, flags or the environment.

use std::fmt;
use std::ops::Range;
use std::path::PathBuf;

use crate::error::{Result, SpiroError};

/// Default location of the generated workbook
pub const DEFAULT_OUTPUT_PATH: &str = "./data/train/synthetic_data.xlsx";

/// Default number of patients in a cohort
pub const DEFAULT_PATIENT_COUNT: usize = 2000;

/// Duration of a simulated forced exhalation, in seconds
pub const DEFAULT_TOTAL_TIME: f64 = 6.0;

/// Number of samples on each volume curve
pub const DEFAULT_NUM_POINTS: usize = 51;

/// Statistical constants of the synthetic population
#[derive(Debug, Clone, PartialEq)]
pub struct CohortParameters {
    /// Age range in years, sampled uniformly
    pub age_range: Range<f64>,
    /// Probability that a patient is male
    pub male_probability: f64,
    /// Probability that a patient smokes
    pub smoking_probability: f64,
    /// COPD probability for smokers
    pub copd_probability_smoker: f64,
    /// COPD probability for non-smokers
    pub copd_probability_non_smoker: f64,
    /// Predicted FVC at the reference age for males (liters)
    pub male_fvc_intercept: f64,
    /// Predicted FVC at the reference age for females (liters)
    pub female_fvc_intercept: f64,
    /// Yearly FVC decline after the reference age (liters/year)
    pub fvc_decline_per_year: f64,
    /// Age at which the intercepts apply
    pub reference_age: f64,
    /// Multiplier range applied to predicted FVC for healthy patients
    pub healthy_fvc_factor: Range<f64>,
    /// Multiplier range applied to predicted FVC for COPD patients
    pub copd_fvc_factor: Range<f64>,
    /// Exhalation time constant for healthy patients (1/s)
    pub healthy_time_constant: f64,
    /// Exhalation time constant for COPD patients (1/s)
    pub copd_time_constant: f64,
}

impl Default for CohortParameters {
    fn default() -> Self {
        Self {
            age_range: 40.0..70.0,
            male_probability: 0.5,
            smoking_probability: 0.2,
            copd_probability_smoker: 0.2,
            copd_probability_non_smoker: 0.02,
            male_fvc_intercept: 5.0,
            female_fvc_intercept: 4.0,
            fvc_decline_per_year: 0.02,
            reference_age: 40.0,
            healthy_fvc_factor: 0.9..1.1,
            copd_fvc_factor: 0.6..0.8,
            healthy_time_constant: 12.0,
            copd_time_constant: 5.7,
        }
    }
}

impl CohortParameters {
    /// COPD probability for the given smoking status
    #[must_use]
    pub fn copd_probability(&self, smoking: bool) -> f64 {
        if smoking {
            self.copd_probability_smoker
        } else {
            self.copd_probability_non_smoker
        }
    }

    fn validate(&self) -> Result<()> {
        let probabilities = [
            ("male_probability", self.male_probability),
            ("smoking_probability", self.smoking_probability),
            ("copd_probability_smoker", self.copd_probability_smoker),
            ("copd_probability_non_smoker", self.copd_probability_non_smoker),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SpiroError::Config(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }

        let ranges = [
            ("age_range", &self.age_range),
            ("healthy_fvc_factor", &self.healthy_fvc_factor),
            ("copd_fvc_factor", &self.copd_fvc_factor),
        ];
        for (name, range) in ranges {
            if range.is_empty() || !range.start.is_finite() || !range.end.is_finite() {
                return Err(SpiroError::Config(format!(
                    "{name} must be a non-empty finite range, got {range:?}"
                )));
            }
        }

        if self.healthy_time_constant <= 0.0 || self.copd_time_constant <= 0.0 {
            return Err(SpiroError::Config(
                "Exhalation time constants must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration for the generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of patient records to generate
    pub n_patients: usize,
    /// Duration of the simulated exhalation in seconds
    pub total_time: f64,
    /// Number of samples per volume curve
    pub num_points: usize,
    /// Destination workbook
    pub output_path: PathBuf,
    /// Seed for the random number generator; `None` draws from OS entropy
    pub random_seed: Option<u64>,
    /// Draw a progress bar while sampling
    pub show_progress: bool,
    /// Population constants
    pub cohort: CohortParameters,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_patients: DEFAULT_PATIENT_COUNT,
            total_time: DEFAULT_TOTAL_TIME,
            num_points: DEFAULT_NUM_POINTS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            random_seed: None,
            show_progress: true,
            cohort: CohortParameters::default(),
        }
    }
}

impl GeneratorConfig {
    /// Sampling interval of the volume curve in seconds
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.total_time / self.num_points.saturating_sub(1).max(1) as f64
    }

    /// Curve index used as the one-second mark.
    ///
    /// `round(1 / dt)` only approximates one second when `dt` does not divide
    /// it evenly (index 8, i.e. 0.96 s, for the default grid).
    #[must_use]
    pub fn fev1_index(&self) -> usize {
        let idx = (1.0 / self.dt()).round() as usize;
        idx.min(self.num_points.saturating_sub(1))
    }

    /// Check that the configuration describes a cohort that can be generated
    pub fn validate(&self) -> Result<()> {
        if self.n_patients == 0 {
            return Err(SpiroError::Config(
                "n_patients must be greater than zero".to_string(),
            ));
        }
        if self.num_points < 2 {
            return Err(SpiroError::Config(format!(
                "num_points must be at least 2, got {}",
                self.num_points
            )));
        }
        if !(self.total_time.is_finite() && self.total_time > 0.0) {
            return Err(SpiroError::Config(format!(
                "total_time must be positive, got {}",
                self.total_time
            )));
        }
        self.cohort.validate()
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Patients: {}", self.n_patients)?;
        writeln!(f, "  Test Duration: {} s", self.total_time)?;
        writeln!(f, "  Curve Points: {} (dt = {:.3} s)", self.num_points, self.dt())?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        match self.random_seed {
            Some(seed) => writeln!(f, "  Seed: {seed}")?,
            None => writeln!(f, "  Seed: <entropy>")?,
        }
        Ok(())
    }
}
