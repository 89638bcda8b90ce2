pub mod contamination;
pub mod error;
pub mod features;
pub mod samples;
pub mod seed;
pub mod stats;
pub mod weights;

pub use contamination::{ContaminationWindow, contaminate};
pub use error::{Result, SynthesisErr};
pub use features::{evaluate_polynomial, power_expand};
pub use samples::{SampleSet, synthesize};
pub use seed::Seed;
pub use stats::mean_squared_error;
pub use weights::{Coefficients, Weights, sample_weights};
