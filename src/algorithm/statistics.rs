//! Cohort statistics and summaries
//!
//! Descriptive statistics over a generated cohort, logged after generation so
//! a run can be sanity-checked without opening the workbook.

use std::fmt;

use crate::models::{PatientRecord, Sex};

/// Mean spirometry values for one group of patients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMeans {
    /// Patients in the group
    pub count: usize,
    /// Mean FVC (L)
    pub fvc: f64,
    /// Mean FEV1 (L)
    pub fev1: f64,
    /// Mean PEF (L/min)
    pub pef: f64,
    /// Mean FEV1/FVC ratio
    pub fev1_fvc_ratio: f64,
}

impl GroupMeans {
    fn from_records<'a>(records: impl Iterator<Item = &'a PatientRecord>) -> Self {
        let mut means = Self::default();
        for r in records {
            means.count += 1;
            means.fvc += r.fvc;
            means.fev1 += r.fev1;
            means.pef += r.pef;
            means.fev1_fvc_ratio += r.fev1_fvc_ratio();
        }
        if means.count > 0 {
            let n = means.count as f64;
            means.fvc /= n;
            means.fev1 /= n;
            means.pef /= n;
            means.fev1_fvc_ratio /= n;
        }
        means
    }
}

/// Structure containing basic cohort statistics
#[derive(Debug, Clone, PartialEq)]
pub struct CohortStats {
    /// Total number of patients
    pub patient_count: usize,
    /// Number of male patients
    pub male_count: usize,
    /// Number of smokers
    pub smoker_count: usize,
    /// Number of COPD-positive patients
    pub copd_count: usize,
    /// COPD-positive smokers
    pub copd_smoker_count: usize,
    /// COPD-positive non-smokers
    pub copd_non_smoker_count: usize,
    /// Mean age in years
    pub mean_age: f64,
    /// Means over healthy patients
    pub healthy: GroupMeans,
    /// Means over COPD patients
    pub copd: GroupMeans,
}

impl CohortStats {
    /// Calculate statistics for a cohort
    #[must_use]
    pub fn calculate(records: &[PatientRecord]) -> Self {
        let patient_count = records.len();
        let male_count = records.iter().filter(|r| r.sex == Sex::Male).count();
        let smoker_count = records.iter().filter(|r| r.smoking).count();
        let copd_count = records.iter().filter(|r| r.copd).count();
        let copd_smoker_count = records.iter().filter(|r| r.copd && r.smoking).count();
        let mean_age = if patient_count > 0 {
            records.iter().map(|r| r.age).sum::<f64>() / patient_count as f64
        } else {
            0.0
        };

        Self {
            patient_count,
            male_count,
            smoker_count,
            copd_count,
            copd_smoker_count,
            copd_non_smoker_count: copd_count - copd_smoker_count,
            mean_age,
            healthy: GroupMeans::from_records(records.iter().filter(|r| !r.copd)),
            copd: GroupMeans::from_records(records.iter().filter(|r| r.copd)),
        }
    }

    /// Empirical P(COPD | smoker); `None` when there are no smokers
    #[must_use]
    pub fn copd_prevalence_smokers(&self) -> Option<f64> {
        ratio(self.copd_smoker_count, self.smoker_count)
    }

    /// Empirical P(COPD | non-smoker); `None` when everyone smokes
    #[must_use]
    pub fn copd_prevalence_non_smokers(&self) -> Option<f64> {
        ratio(
            self.copd_non_smoker_count,
            self.patient_count - self.smoker_count,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v * 100.0))
}

impl fmt::Display for CohortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort Summary:")?;
        writeln!(f, "  Patients: {}", self.patient_count)?;
        writeln!(f, "  Mean Age: {:.1}", self.mean_age)?;
        writeln!(f, "  Male: {}", self.male_count)?;
        writeln!(f, "  Smokers: {}", self.smoker_count)?;
        writeln!(f, "  COPD: {}", self.copd_count)?;
        writeln!(
            f,
            "  COPD Prevalence (smokers): {}",
            percent(self.copd_prevalence_smokers())
        )?;
        writeln!(
            f,
            "  COPD Prevalence (non-smokers): {}",
            percent(self.copd_prevalence_non_smokers())
        )?;
        for (label, group) in [("Healthy", &self.healthy), ("COPD", &self.copd)] {
            writeln!(
                f,
                "  {label} (n={}): FVC {:.2} L, FEV1 {:.2} L, FEV1/FVC {:.2}, PEF {:.0} L/min",
                group.count, group.fvc, group.fev1, group.fev1_fvc_ratio, group.pef
            )?;
        }
        Ok(())
    }
}
