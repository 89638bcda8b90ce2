//! Ordinary least squares over the exchange files.
//!
//! A plain, non robust baseline: any contamination in the input pulls the fit towards it.

mod error;

use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

pub use error::{OlsErr, Result};

/// Fits `y ~ [1 | X] . w` by solving the normal equations.
///
/// # Arguments
/// * `features` - An `n x p` feature matrix.
/// * `targets` - The `n` targets.
///
/// # Returns
/// The `p + 1` coefficients, intercept first, or an error if the system can't be solved.
pub fn fit(features: ArrayView2<f64>, targets: ArrayView1<f64>) -> Result<Array1<f64>> {
    let (samples, coefficients) = (features.nrows(), features.ncols() + 1);
    if samples < coefficients {
        return Err(OlsErr::Underdetermined {
            samples,
            coefficients,
        });
    }

    let mut design = Array2::<f64>::ones((samples, coefficients));
    design.slice_mut(s![.., 1..]).assign(&features);

    let gram = design.t().dot(&design);
    let moments = design.t().dot(&targets);

    solve(gram, moments)
}

/// Reads the input file, fits it and writes the coefficient file.
///
/// # Returns
/// The written coefficients.
pub fn solve_files(input: &Path, output: &Path) -> Result<Array1<f64>> {
    let (features, targets) = exchange::import_input(input)?;
    debug!(
        "fitting {} samples with {} features",
        features.nrows(),
        features.ncols()
    );

    let coefficients = fit(features.view(), targets.view())?;
    exchange::export_coefficients(output, coefficients.view())?;
    Ok(coefficients)
}

/// Gaussian elimination with partial pivoting over a square system.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();
    let scale = a.iter().fold(0f64, |acc, v| acc.max(v.abs()));
    let tolerance = f64::EPSILON * n as f64 * scale;

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);

        if !(a[[pivot, col]].abs() > tolerance) {
            return Err(OlsErr::Singular { column: col });
        }

        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, arr1, arr2};

    use super::*;

    fn powers(x: &Array1<f64>, p: usize) -> Array2<f64> {
        Array2::from_shape_fn((x.len(), p), |(i, j)| x[i].powi(j as i32 + 1))
    }

    #[test]
    fn recovers_an_exact_quadratic() {
        let x = Array1::<f64>::linspace(-1., 1., 21);
        let y = x.mapv(|v| 2. - v + 0.5 * v * v);

        let w = fit(powers(&x, 2).view(), y.view()).unwrap();

        for (got, want) in w.iter().zip([2., -1., 0.5]) {
            assert!((got - want).abs() < 1e-9, "{w:?}");
        }
    }

    #[test]
    fn fits_the_mean_of_symmetric_noise() {
        let features = arr2(&[[0.], [0.], [1.], [1.]]);
        let targets = arr1(&[-1., 1., 2., 4.]);

        let w = fit(features.view(), targets.view()).unwrap();

        assert!((w[0] - 0.).abs() < 1e-12);
        assert!((w[1] - 3.).abs() < 1e-12);
    }

    #[test]
    fn constant_inputs_are_singular() {
        let x = Array1::from_elem(10, 0.5);
        let res = fit(powers(&x, 1).view(), x.view());
        assert!(matches!(res, Err(OlsErr::Singular { .. })));
    }

    #[test]
    fn too_few_samples_are_rejected() {
        let x = arr1(&[0.1, 0.2]);
        let res = fit(powers(&x, 3).view(), x.view());
        assert!(matches!(
            res,
            Err(OlsErr::Underdetermined {
                samples: 2,
                coefficients: 4
            })
        ));
    }
}
