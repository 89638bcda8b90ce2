use ndarray::ArrayView1;

use crate::{Result, SynthesisErr};

/// Mean squared error between predictions and targets.
///
/// # Arguments
/// * `predicted` - The predicted values.
/// * `actual` - The target values.
///
/// # Returns
/// The mean of the squared residuals, or an error if the lengths differ or are zero.
pub fn mean_squared_error(predicted: ArrayView1<f64>, actual: ArrayView1<f64>) -> Result<f64> {
    if predicted.len() != actual.len() {
        return Err(SynthesisErr::SizeMismatch {
            a: "predictions",
            b: "targets",
            got: predicted.len(),
            expected: actual.len(),
        });
    }

    (&predicted - &actual)
        .mapv(|r| r.powi(2))
        .mean()
        .ok_or(SynthesisErr::EmptySampleSet)
}

/// Population standard deviation (no degrees of freedom correction).
///
/// # Returns
/// The standard deviation, `NaN` for an empty input.
pub fn std_dev(values: ArrayView1<f64>) -> f64 {
    values.std(0.)
}

/// The spread between the largest and the smallest value.
///
/// # Returns
/// `max - min`, or `None` if `values` is empty.
pub fn value_range(values: ArrayView1<f64>) -> Option<f64> {
    let (min, max) = min_max(values)?;
    Some(max - min)
}

/// The smallest and largest value, in that order.
pub fn min_max(values: ArrayView1<f64>) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;

    use super::*;

    #[test]
    fn perfect_fit_has_zero_error() {
        let y = arr1(&[1.5, -2., 3.25]);
        assert_eq!(mean_squared_error(y.view(), y.view()).unwrap(), 0.);
    }

    #[test]
    fn error_is_mean_of_squared_residuals() {
        let predicted = arr1(&[1., 2., 3., 4.]);
        let actual = arr1(&[1., 0., 3., 8.]);
        assert_eq!(mean_squared_error(predicted.view(), actual.view()).unwrap(), 5.);
    }

    #[test]
    fn error_is_never_negative() {
        let predicted = arr1(&[-3., 0.1, 7.]);
        let actual = arr1(&[2., -0.1, -7.]);
        assert!(mean_squared_error(predicted.view(), actual.view()).unwrap() > 0.);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let res = mean_squared_error(arr1(&[1.]).view(), arr1(&[1., 2.]).view());
        assert!(matches!(res, Err(SynthesisErr::SizeMismatch { .. })));
    }

    #[test]
    fn empty_sets_have_no_error() {
        let empty = arr1::<f64>(&[]);
        let res = mean_squared_error(empty.view(), empty.view());
        assert!(matches!(res, Err(SynthesisErr::EmptySampleSet)));
    }

    #[test]
    fn std_dev_matches_population_formula() {
        let values = arr1(&[2., 4., 4., 4., 5., 5., 7., 9.]);
        assert!((std_dev(values.view()) - 2.).abs() < 1e-12);
    }

    #[test]
    fn range_spans_extremes() {
        let values = arr1(&[0.5, -1.5, 3.]);
        assert_eq!(min_max(values.view()), Some((-1.5, 3.)));
        assert_eq!(value_range(values.view()), Some(4.5));
        assert_eq!(value_range(arr1::<f64>(&[]).view()), None);
    }
}
