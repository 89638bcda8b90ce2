use ndarray::{Array1, ArrayView1, ArrayView2};
use synthesis::{Coefficients, SampleSet, mean_squared_error};

use crate::Result;

/// The fitted model's predictions over a sample set and their error.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    predictions: Array1<f64>,
    mse: f64,
}

impl Evaluation {
    pub fn predictions(&self) -> ArrayView1<'_, f64> {
        self.predictions.view()
    }

    pub fn mse(&self) -> f64 {
        self.mse
    }
}

/// Predicts every sample from its features and scores the predictions.
///
/// # Arguments
/// * `coefficients` - The fitted coefficients, intercept first.
/// * `samples` - The sample set the features were expanded from.
/// * `features` - The sample set's power-basis features.
///
/// # Returns
/// The evaluation, or an error if the shapes don't line up.
pub fn evaluate(
    coefficients: &Coefficients,
    samples: &SampleSet,
    features: ArrayView2<f64>,
) -> Result<Evaluation> {
    let predictions = coefficients.predict(features)?;
    let mse = mean_squared_error(predictions.view(), samples.y())?;

    Ok(Evaluation { predictions, mse })
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;
    use synthesis::power_expand;

    use super::*;
    use crate::HarnessErr;

    fn line() -> SampleSet {
        let x = arr1(&[-1., 0., 1.]);
        let y = x.mapv(|v| 1. + 2. * v);
        SampleSet::new(x, y).unwrap()
    }

    #[test]
    fn exact_coefficients_score_zero() {
        let samples = line();
        let features = power_expand(samples.x(), 1);

        let eval = evaluate(&Coefficients::new(arr1(&[1., 2.])), &samples, features.view()).unwrap();

        assert_eq!(eval.predictions(), samples.y());
        assert_eq!(eval.mse(), 0.);
    }

    #[test]
    fn offset_coefficients_score_the_squared_offset() {
        let samples = line();
        let features = power_expand(samples.x(), 1);

        let eval = evaluate(&Coefficients::new(arr1(&[3., 2.])), &samples, features.view()).unwrap();

        assert_eq!(eval.mse(), 4.);
    }

    #[test]
    fn wrong_coefficient_count_is_reported() {
        let samples = line();
        let features = power_expand(samples.x(), 2);

        let res = evaluate(&Coefficients::new(arr1(&[1., 2.])), &samples, features.view());
        assert!(matches!(res, Err(HarnessErr::Synthesis(_))));
    }
}
