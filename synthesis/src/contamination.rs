use std::ops::Range;

use log::debug;

use crate::{Result, SampleSet, SynthesisErr, stats};

/// The training samples whose targets were shifted to simulate outliers.
#[derive(Debug, Clone, PartialEq)]
pub struct ContaminationWindow {
    indices: Vec<usize>,
    offset: f64,
}

impl ContaminationWindow {
    /// The indices of the contaminated samples, in ascending `x` order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The amount added to each contaminated target.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// The rank range of the contaminated samples: the middle `epsilon` fraction of `n` samples
/// ranked by ascending `x`, that is `[n(1-eps)/2, n(1+eps)/2)` with both ends truncated.
///
/// # Returns
/// The rank range, or an error if `epsilon` isn't within `[0, 1]`.
pub fn window_bounds(n: usize, epsilon: f64) -> Result<Range<usize>> {
    if !(0. ..=1.).contains(&epsilon) {
        return Err(SynthesisErr::InvalidFraction(epsilon));
    }

    let bound = |factor: f64| ((n as f64 * factor * 0.5) as usize).min(n);
    Ok(bound(1. - epsilon)..bound(1. + epsilon))
}

/// The nominal amount of contaminated samples, `ceil(epsilon * n)`.
pub fn expected_size(n: usize, epsilon: f64) -> usize {
    (epsilon * n as f64).ceil() as usize
}

/// Contaminates the middle `epsilon` fraction of the samples, ranked by ascending `x`, by
/// adding the targets' range (`max(y) - min(y)`) to each of them.
///
/// The offset is taken from the targets as they are before this call. Outliers end up
/// concentrated around the median `x` rather than at the extremes.
///
/// # Arguments
/// * `samples` - The training samples, their targets get updated in place.
/// * `epsilon` - The contaminated fraction, within `[0, 1]`.
///
/// # Returns
/// The contamination window, or an error if `epsilon` is out of range.
pub fn contaminate(samples: &mut SampleSet, epsilon: f64) -> Result<ContaminationWindow> {
    let n = samples.len();
    let bounds = window_bounds(n, epsilon)?;
    let offset = stats::value_range(samples.y()).unwrap_or_default();

    let x = samples.x();
    let mut ranks: Vec<usize> = (0..n).collect();
    ranks.sort_by(|&a, &b| x[a].total_cmp(&x[b]));

    let indices = ranks[bounds].to_vec();
    samples.shift(&indices, offset);

    debug!(
        "contaminated {} of {n} samples (nominal {}), offset {offset}",
        indices.len(),
        expected_size(n, epsilon)
    );

    Ok(ContaminationWindow { indices, offset })
}
