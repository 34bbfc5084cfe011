//! Full pipeline: generate, write the workbook, read it back

use calamine::{Data, Reader, Xlsx, open_workbook};
use spirogen::run;
use spirogen::table::COLUMN_NAMES;
use spirogen::writer::DEFAULT_SHEET_NAME;

use crate::utils::{test_config, workbook_path};

#[test]
fn test_workbook_has_header_and_all_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let path = workbook_path(tmp.path());
    let config = spirogen::GeneratorConfig {
        output_path: path.clone(),
        ..test_config(12, 2000)
    };

    let stats = run(&config).unwrap();
    assert_eq!(stats.patient_count, 2000);
    assert!(path.is_file());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec![DEFAULT_SHEET_NAME.to_string()]);
    let range = workbook.worksheet_range(DEFAULT_SHEET_NAME).unwrap();
    assert_eq!(range.get_size(), (2001, 8));

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .unwrap()
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.clone(),
            other => panic!("header cell is not a string: {other:?}"),
        })
        .collect();
    assert_eq!(header, COLUMN_NAMES);

    for row in rows {
        for (idx, name) in [(1, "sex"), (2, "smoking"), (3, "COPD")] {
            match &row[idx] {
                Data::Float(v) => assert!(*v == 0.0 || *v == 1.0, "{name} = {v}"),
                other => panic!("{name} cell is not numeric: {other:?}"),
            }
        }
        for (idx, name) in [(0, "age"), (4, "FVC"), (5, "FEV1"), (6, "PEF")] {
            match &row[idx] {
                Data::Float(v) => assert!(v.is_finite() && *v > 0.0, "{name} = {v}"),
                other => panic!("{name} cell is not a float: {other:?}"),
            }
        }
        if let Data::Float(age) = &row[0] {
            assert!((40.0..70.0).contains(age));
        }
        match &row[7] {
            Data::String(flow) => {
                let points: Vec<i64> = flow.split(',').map(|p| p.parse().unwrap()).collect();
                assert_eq!(points.len(), 51);
                assert_eq!(points[0], 0);
            }
            other => panic!("flow cell is not a string: {other:?}"),
        }
    }
}

#[test]
fn test_rerun_overwrites_existing_workbook() {
    let tmp = tempfile::tempdir().unwrap();
    let path = workbook_path(tmp.path());

    let first = spirogen::GeneratorConfig {
        output_path: path.clone(),
        ..test_config(1, 20)
    };
    run(&first).unwrap();

    let second = spirogen::GeneratorConfig {
        output_path: path.clone(),
        ..test_config(2, 30)
    };
    run(&second).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range(DEFAULT_SHEET_NAME).unwrap();
    assert_eq!(range.get_size(), (31, 8));
}

#[test]
fn test_unwritable_output_directory_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("data");
    std::fs::write(&blocker, b"file where a directory should be").unwrap();

    let config = spirogen::GeneratorConfig {
        output_path: workbook_path(tmp.path()),
        ..test_config(5, 10)
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, spirogen::SpiroError::OutputDirectory { .. }));
}
