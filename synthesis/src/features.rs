use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};

use crate::{Result, SynthesisErr};

/// Expands scalar inputs into their power basis.
///
/// ```text
/// | x0 |    | x0 x0^2 ... x0^p |
/// | x1 | => | x1 x1^2 ... x1^p |
/// | .. |    | .. .... ... .... |
/// ```
///
/// # Arguments
/// * `x` - The scalar inputs.
/// * `power` - The highest power to expand to, it's also the amount of columns.
///
/// # Returns
/// An `n x power` matrix whose column `j` holds `x^(j+1)`.
pub fn power_expand(x: ArrayView1<f64>, power: usize) -> Array2<f64> {
    let mut features = Array2::zeros((x.len(), power));

    for (j, mut column) in features.axis_iter_mut(Axis(1)).enumerate() {
        let exp = j as i32 + 1;
        column.zip_mut_with(&x, |f, &v| *f = v.powi(exp));
    }

    features
}

/// Evaluates `[1, x, x^2, ...] . coefficients` for every row of a feature matrix.
///
/// Terms are accumulated left to right starting from the intercept, so a row is evaluated
/// the same way no matter where it comes from.
///
/// # Arguments
/// * `coefficients` - Intercept-first polynomial coefficients.
/// * `features` - A feature matrix as produced by `power_expand`.
///
/// # Returns
/// The evaluated polynomial per row, or an error if the shapes don't line up.
pub fn evaluate_polynomial(
    coefficients: ArrayView1<f64>,
    features: ArrayView2<f64>,
) -> Result<Array1<f64>> {
    if coefficients.len() != features.ncols() + 1 {
        return Err(SynthesisErr::SizeMismatch {
            a: "coefficients",
            b: "features",
            got: coefficients.len(),
            expected: features.ncols() + 1,
        });
    }

    let intercept = coefficients[0];
    let terms = coefficients.slice(s![1..]);

    let values = features
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(terms.iter())
                .fold(intercept, |acc, (&f, &c)| acc + c * f)
        })
        .collect();

    Ok(values)
}
