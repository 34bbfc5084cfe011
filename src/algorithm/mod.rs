//! Generation algorithms
//!
//! Demographic sampling, spirometry simulation, cohort assembly and the
//! checks and summaries run over a finished cohort.

pub mod cohort;
pub mod demographics;
pub mod spirometry;
pub mod statistics;
pub mod validation;

// Re-export commonly used items
pub use cohort::{create_rng, generate_cohort, generate_cohort_with_rng};
pub use demographics::{sample_demographics, sample_many};
pub use spirometry::{
    TimeGrid, actual_fvc, derive_record, fev1, peak_expiratory_flow, predicted_fvc,
    simulate_curve, time_constant,
};
pub use statistics::{CohortStats, GroupMeans};
pub use validation::{validate_cohort, validate_record};
