use std::fs;

use exchange::{
    ExchangeErr, export_coefficients, export_input, import_coefficients, import_input,
};
use ndarray::{Array1, Array2, arr1};

#[test]
fn input_file_reproduces_features_and_targets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");

    let x = Array1::<f64>::linspace(-1., 1., 17);
    let features = Array2::from_shape_fn((x.len(), 3), |(i, j)| x[i].powi(j as i32 + 1) / 3.);
    let targets = x.mapv(|v| 0.1 + v.exp());

    export_input(&path, features.view(), targets.view()).unwrap();
    let (read_features, read_targets) = import_input(&path).unwrap();

    assert_eq!(read_features, features);
    assert_eq!(read_targets, targets);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 17);
    assert!(content.lines().all(|l| l.matches("  ").count() == 1));
}

#[test]
fn coefficient_file_reproduces_coefficients() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let coefficients = arr1(&[-7.25, 1. / 3., 2e-9, 123456.789]);

    export_coefficients(&path, coefficients.view()).unwrap();
    let read = import_coefficients(&path, coefficients.len()).unwrap();

    assert_eq!(read, coefficients);
}

#[test]
fn export_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    export_coefficients(&path, arr1(&[1., 2., 3., 4.]).view()).unwrap();
    export_coefficients(&path, arr1(&[5., 6.]).view()).unwrap();

    assert_eq!(import_coefficients(&path, 2).unwrap(), arr1(&[5., 6.]));
}

#[test]
fn missing_output_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let err = import_coefficients(&path, 3).unwrap_err();

    assert!(matches!(err, ExchangeErr::File { .. }));
    assert!(err.to_string().contains("out.txt"));
}
