use ndarray::{Array1, ArrayView1};
use ndarray_rand::RandomExt;
use rand_distr::{Normal, Uniform};

use crate::{Result, Seed, SynthesisErr, Weights, features, stats};

/// Paired inputs and targets of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl SampleSet {
    /// Creates a new `SampleSet`.
    ///
    /// # Returns
    /// The sample set, or an error if `x` and `y` differ in length.
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SynthesisErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    #[inline]
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Shifts the target of every given index by `offset`.
    pub(crate) fn shift(&mut self, indices: &[usize], offset: f64) {
        for &i in indices {
            self.y[i] += offset;
        }
    }
}

/// Draws samples from the polynomial described by `weights` plus calibrated gaussian noise.
///
/// The inputs are drawn first, uniformly over `[-1, 1)`, then one noise term per sample
/// from `N(0, noise_level * std(y_clean))`. A zero noise level leaves the clean targets
/// untouched.
///
/// # Arguments
/// * `seed` - The run's seed, a fresh stream is opened from it.
/// * `weights` - The generating polynomial.
/// * `noise_level` - The noise standard deviation relative to the clean targets' one.
/// * `size` - The amount of samples to draw.
///
/// # Returns
/// The samples, or an error if the noise level is negative or not finite, or `size` is zero.
pub fn synthesize(seed: Seed, weights: &Weights, noise_level: f64, size: usize) -> Result<SampleSet> {
    if !noise_level.is_finite() || noise_level < 0. {
        return Err(SynthesisErr::InvalidNoiseLevel(noise_level));
    }

    if size == 0 {
        return Err(SynthesisErr::EmptySampleSet);
    }

    let mut rng = seed.stream();
    let x = Array1::random_using(size, Uniform::new(-1., 1.)?, &mut rng);

    let features = features::power_expand(x.view(), weights.power());
    let clean = features::evaluate_polynomial(weights.view(), features.view())?;

    let sigma = noise_level * stats::std_dev(clean.view());
    let noise = Array1::random_using(size, Normal::new(0., sigma)?, &mut rng);
    let y = clean + noise;

    SampleSet::new(x, y)
}
