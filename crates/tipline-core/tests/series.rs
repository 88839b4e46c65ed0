// File: crates/tipline-core/tests/series.rs
// Purpose: Load-time validation of tables and the stack layout offsets.

use tipline_core::{stack_layout, Datum, Sample, StackOffset, StackedData, Table, TipsError, Value};

fn row(key: f64, vals: &[f64]) -> Datum {
    Datum::new(key, vals.iter().map(|&v| Value::Number(v)))
}

#[test]
fn unsorted_keys_are_rejected() {
    let err = Table::new(vec![row(0.0, &[1.0]), row(2.0, &[1.0]), row(1.0, &[1.0])]).unwrap_err();
    assert!(matches!(err, TipsError::UnsortedKeys { row: 2, .. }), "{err}");
}

#[test]
fn equal_keys_are_allowed() {
    let t = Table::new(vec![row(0.0, &[1.0]), row(0.0, &[2.0]), row(1.0, &[3.0])]).expect("non-decreasing");
    assert_eq!(t.len(), 3);
}

#[test]
fn non_finite_key_is_rejected() {
    let err = Table::new(vec![row(0.0, &[1.0]), row(f64::NAN, &[1.0])]).unwrap_err();
    assert!(matches!(err, TipsError::NonFiniteKey { row: 1 }));
}

#[test]
fn non_finite_values_are_rejected() {
    let err = Table::new(vec![row(0.0, &[1.0, 2.0]), row(1.0, &[3.0, f64::NAN])]).unwrap_err();
    assert!(matches!(err, TipsError::NonFiniteValue { row: 1, series: 1 }), "{err}");

    let err = Table::new(vec![row(0.0, &[f64::INFINITY])]).unwrap_err();
    assert!(matches!(err, TipsError::NonFiniteValue { row: 0, series: 0 }));

    // a gap is spelled Missing and stays valid
    assert!(Table::new(vec![Datum::new(0.0, [Value::Missing, Value::Number(0.0)])]).is_ok());
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Table::new(vec![row(0.0, &[1.0, 2.0]), row(1.0, &[1.0])]).unwrap_err();
    assert!(matches!(err, TipsError::RaggedRow { row: 1, expected: 2, found: 1 }));
}

#[test]
fn from_series_builds_rows_and_checks_alignment() {
    let a = vec![Sample { key: 0.0, val: 1.0.into() }, Sample { key: 1.0, val: 2.0.into() }];
    let b = vec![Sample { key: 0.0, val: Value::Missing }, Sample { key: 1.0, val: 4.0.into() }];
    let t = Table::from_series(vec![a.clone(), b]).expect("aligned");
    assert_eq!(t.width(), 2);
    assert_eq!(t.rows()[0].series, vec![Value::Number(1.0), Value::Missing]);
    assert_eq!(t.series(0), a);

    let shifted = vec![Sample { key: 0.0, val: 1.0.into() }, Sample { key: 1.5, val: 2.0.into() }];
    let err = Table::from_series(vec![a, shifted]).unwrap_err();
    assert!(matches!(err, TipsError::MisalignedSeries { series: 1, index: 1 }));
}

#[test]
fn empty_stack_is_rejected() {
    assert!(matches!(StackedData::new(Vec::new()), Err(TipsError::EmptyStack)));
    let no_series = Table::new(vec![Datum::new(0.0, [])]).expect("zero-width rows are valid");
    assert!(matches!(stack_layout(&no_series, StackOffset::Zero), Err(TipsError::EmptyStack)));
}

#[test]
fn zero_offset_stacks_from_zero_and_treats_missing_as_flat() {
    let t = Table::new(vec![
        Datum::new(0.0, [Value::Number(1.0), Value::Missing, Value::Number(3.0)]),
        row(1.0, &[2.0, 2.0, 2.0]),
    ])
    .expect("valid");
    let s = stack_layout(&t, StackOffset::Zero).expect("stackable");
    assert_eq!(s.series_count(), 3);
    assert_eq!(s.len(), 2);

    let at0: Vec<(f64, f64)> = s.series().iter().map(|b| (b[0].y0, b[0].top())).collect();
    assert_eq!(at0, vec![(0.0, 1.0), (1.0, 1.0), (1.0, 4.0)]);
    // the gap keeps its marker for the tip text
    assert_eq!(s.series()[1][0].raw[1], Value::Missing);
}

#[test]
fn silhouette_offset_centers_the_stack() {
    let t = Table::new(vec![row(0.0, &[2.0, 4.0]), row(1.0, &[1.0, 1.0])]).expect("valid");
    let s = stack_layout(&t, StackOffset::Silhouette).expect("stackable");
    let bottom = &s.series()[0];
    let top = &s.series()[1];
    assert_eq!(bottom[0].y0, -3.0);
    assert_eq!(top[0].top(), 3.0);
    assert_eq!(bottom[1].y0, -1.0);
    assert_eq!(top[1].top(), 1.0);
}
