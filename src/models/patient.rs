//! Patient model
//!
//! A `PatientRecord` is one row of the generated table. Its random inputs are
//! captured separately in `Demographics` so that sampling and curve simulation
//! can run as distinct stages.

use itertools::Itertools;

/// Biological sex as encoded in the output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Encoded as 0
    Female,
    /// Encoded as 1
    Male,
}

impl Sex {
    /// Integer code written to the `sex` column
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    /// Map a Bernoulli draw (true = male) to a sex
    #[must_use]
    pub const fn from_male_flag(male: bool) -> Self {
        if male { Self::Male } else { Self::Female }
    }
}

/// All random draws belonging to a single patient
#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    /// Age in years
    pub age: f64,
    /// Sex
    pub sex: Sex,
    /// Current smoker
    pub smoking: bool,
    /// COPD label
    pub copd: bool,
    /// Multiplier applied to the predicted FVC
    pub fvc_factor: f64,
}

/// A simulated volume-over-time curve
#[derive(Debug, Clone, PartialEq)]
pub struct SpirometryCurve {
    /// Exhaled volume at each sample (mL), before rounding
    pub volume_ml: Vec<f64>,
    /// Exhaled volume rounded to whole mL
    pub rounded_ml: Vec<i64>,
}

impl SpirometryCurve {
    /// Number of samples on the curve
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounded_ml.len()
    }

    /// Whether the curve has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounded_ml.is_empty()
    }
}

/// One row of the generated spirometry table
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    /// Age in years
    pub age: f64,
    /// Sex
    pub sex: Sex,
    /// Current smoker
    pub smoking: bool,
    /// COPD label
    pub copd: bool,
    /// Forced vital capacity (L)
    pub fvc: f64,
    /// Forced expiratory volume in one second (L)
    pub fev1: f64,
    /// Peak expiratory flow (L/min)
    pub pef: f64,
    /// Rounded volume curve (mL)
    pub flow: Vec<i64>,
}

impl PatientRecord {
    /// FVC in millilitres
    #[must_use]
    pub fn fvc_ml(&self) -> f64 {
        self.fvc * 1000.0
    }

    /// FEV1/FVC ratio
    #[must_use]
    pub fn fev1_fvc_ratio(&self) -> f64 {
        self.fev1 / self.fvc
    }

    /// The volume curve as a comma-separated string, e.g. `0,45,88,...`
    #[must_use]
    pub fn flow_string(&self) -> String {
        self.flow.iter().join(",")
    }
}
