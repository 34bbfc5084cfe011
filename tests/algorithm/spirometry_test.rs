//! Tests for curve simulation and derived metrics

use spirogen::GeneratorConfig;
use spirogen::algorithm::{TimeGrid, fev1, peak_expiratory_flow, simulate_curve};

#[test]
fn test_fev1_index_approximates_one_second() {
    let config = GeneratorConfig::default();
    let grid = TimeGrid::from_config(&config);
    let idx = config.fev1_index();

    assert_eq!(idx, 8);
    assert!((grid.times[idx] - 0.96).abs() < 1e-12);
}

#[test]
fn test_lower_time_constant_fills_more_slowly() {
    let grid = TimeGrid::new(6.0, 51);
    let fast = simulate_curve(3500.0, 12.0, &grid);
    let slow = simulate_curve(3500.0, 5.7, &grid);

    assert!(fev1(&slow, 8) < fev1(&fast, 8));
    assert!(peak_expiratory_flow(&slow, grid.dt) < peak_expiratory_flow(&fast, grid.dt));
    // Both curves exhale the full capacity by the end of the test
    assert!((*fast.rounded_ml.last().unwrap() - 3500).abs() <= 1);
    assert!(*slow.rounded_ml.last().unwrap() >= 3500);
}

#[test]
fn test_peak_flow_is_first_interval() {
    let grid = TimeGrid::new(6.0, 51);
    let curve = simulate_curve(4000.0, 12.0, &grid);
    let first_step = (curve.rounded_ml[1] - curve.rounded_ml[0]) as f64 / grid.dt;

    assert!((peak_expiratory_flow(&curve, grid.dt) - first_step * 0.06).abs() < 1e-9);
}
