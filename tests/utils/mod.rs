use std::path::{Path, PathBuf};

use spirogen::GeneratorConfig;

/// Relative location of the workbook beneath an output root
pub const WORKBOOK_RELATIVE_PATH: &str = "data/train/synthetic_data.xlsx";

/// Seeded configuration with the progress bar disabled
#[must_use]
pub fn test_config(seed: u64, n_patients: usize) -> GeneratorConfig {
    GeneratorConfig {
        n_patients,
        random_seed: Some(seed),
        show_progress: false,
        ..Default::default()
    }
}

/// Workbook path inside a scratch directory
#[must_use]
pub fn workbook_path(root: &Path) -> PathBuf {
    root.join(WORKBOOK_RELATIVE_PATH)
}

/// Fraction of `hits` over `total`
#[must_use]
pub fn proportion(hits: usize, total: usize) -> f64 {
    assert!(total > 0, "proportion over an empty group");
    hits as f64 / total as f64
}

/// Arithmetic mean of a non-empty sample
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of an empty sample");
    values.iter().sum::<f64>() / values.len() as f64
}
