//! Tests for cohort generation

use spirogen::algorithm::{CohortStats, generate_cohort, predicted_fvc};
use spirogen::{CohortParameters, build_table};

use crate::utils::{mean, proportion, test_config};

#[test]
fn test_records_stay_in_domain() {
    let config = test_config(42, 2000);
    let records = generate_cohort(&config).unwrap();

    assert_eq!(records.len(), 2000);
    for r in &records {
        assert!((40.0..70.0).contains(&r.age), "age {} out of range", r.age);
        assert!([0, 1].contains(&r.sex.code()));
        assert_eq!(r.flow.len(), 51);
        assert_eq!(r.flow[0], 0);
        assert!(r.flow.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_fvc_within_factor_bounds() {
    let config = test_config(3, 2000);
    let params = CohortParameters::default();

    for r in generate_cohort(&config).unwrap() {
        let predicted_ml = predicted_fvc(&params, r.age, r.sex) * 1000.0;
        let (low, high) = if r.copd { (0.6, 0.8) } else { (0.9, 1.1) };
        assert!(r.fvc_ml() >= low * predicted_ml - 1e-6);
        assert!(r.fvc_ml() <= high * predicted_ml + 1e-6);
    }
}

#[test]
fn test_copd_prevalence_depends_on_smoking() {
    let config = test_config(2024, 20_000);
    let records = generate_cohort(&config).unwrap();
    let stats = CohortStats::calculate(&records);

    let smokers = stats.copd_prevalence_smokers().unwrap();
    let non_smokers = stats.copd_prevalence_non_smokers().unwrap();
    assert!((smokers - 0.2).abs() < 0.03, "smoker prevalence {smokers}");
    assert!((non_smokers - 0.02).abs() < 0.01, "non-smoker prevalence {non_smokers}");

    let smoking_rate = proportion(stats.smoker_count, stats.patient_count);
    assert!((smoking_rate - 0.2).abs() < 0.02, "smoking rate {smoking_rate}");
    let male_rate = proportion(stats.male_count, stats.patient_count);
    assert!((male_rate - 0.5).abs() < 0.02, "male rate {male_rate}");
}

#[test]
fn test_same_seed_gives_identical_table() {
    let (first, _) = build_table(&test_config(99, 500)).unwrap();
    let (second, _) = build_table(&test_config(99, 500)).unwrap();
    assert_eq!(first, second);

    let (other, _) = build_table(&test_config(100, 500)).unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_copd_lowers_peak_flow_at_similar_fvc() {
    let records = generate_cohort(&test_config(7, 20_000)).unwrap();

    // FVC band reachable by both groups
    let in_band = |fvc: f64| (3.1..4.0).contains(&fvc);
    let copd_pef: Vec<f64> = records
        .iter()
        .filter(|r| r.copd && in_band(r.fvc))
        .map(|r| r.pef)
        .collect();
    let healthy_pef: Vec<f64> = records
        .iter()
        .filter(|r| !r.copd && in_band(r.fvc))
        .map(|r| r.pef)
        .collect();

    assert!(!copd_pef.is_empty() && !healthy_pef.is_empty());
    assert!(mean(&copd_pef) < mean(&healthy_pef));
}
