//! Domain models for the synthetic cohort
//!
//! This module contains the per-patient entities produced by the generator.

pub mod patient;

// Re-export commonly used types
pub use patient::{Demographics, PatientRecord, Sex, SpirometryCurve};
