use ndarray::{Array1, ArrayView1, ArrayView2};
use ndarray_rand::RandomExt;
use rand_distr::Uniform;

use crate::{Result, Seed, SynthesisErr, features};

/// The ground-truth polynomial coefficients, intercept first.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Array1<f64>);

impl Weights {
    /// Creates a new `Weights` from intercept-first coefficients.
    pub fn new(values: Array1<f64>) -> Self {
        Self(values)
    }

    /// Returns the degree of the generating polynomial.
    pub fn power(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }
}

/// Coefficients produced by an external fit, intercept first.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients(Array1<f64>);

impl Coefficients {
    /// Creates a new `Coefficients` from intercept-first values.
    pub fn new(values: Array1<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// Predicts the target of every row of a power-basis feature matrix.
    ///
    /// # Arguments
    /// * `features` - A feature matrix whose column `j` holds `x^(j+1)`.
    ///
    /// # Returns
    /// The predictions, or an error if the matrix doesn't have `len - 1` columns.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Array1<f64>> {
        features::evaluate_polynomial(self.view(), features)
    }
}

/// Draws a ground-truth weight vector.
///
/// # Arguments
/// * `seed` - The run's seed, a fresh stream is opened from it.
/// * `power` - The degree of the polynomial, `power + 1` weights are drawn.
/// * `low` - The inclusive lower limit.
/// * `high` - The exclusive upper limit.
///
/// # Returns
/// The weights, or an error if `low >= high`.
pub fn sample_weights(seed: Seed, power: usize, low: f64, high: f64) -> Result<Weights> {
    if !(low < high) {
        return Err(SynthesisErr::InvalidBounds { low, high });
    }

    let mut rng = seed.stream();
    let distribution = Uniform::new(low, high)?;
    let values = Array1::random_using(power + 1, distribution, &mut rng);

    Ok(Weights(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_lie_within_bounds() {
        let weights = sample_weights(Seed::new(7), 5, -10., 10.).unwrap();

        assert_eq!(weights.view().len(), 6);
        assert_eq!(weights.power(), 5);
        assert!(weights.view().iter().all(|w| (-10. ..10.).contains(w)));
    }

    #[test]
    fn zero_power_draws_only_the_intercept() {
        let weights = sample_weights(Seed::new(7), 0, 0., 1.).unwrap();
        assert_eq!(weights.view().len(), 1);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let res = sample_weights(Seed::new(7), 3, 1., 1.);
        assert!(matches!(res, Err(SynthesisErr::InvalidBounds { .. })));
    }
}
