use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used in the entire synthesis module.
pub type Result<T> = std::result::Result<T, SynthesisErr>;

/// The synthesis module's error type.
#[derive(Debug)]
pub enum SynthesisErr {
    InvalidBounds {
        low: f64,
        high: f64,
    },
    InvalidFraction(f64),
    InvalidNoiseLevel(f64),
    EmptySampleSet,
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    Distribution(String),
}

impl Display for SynthesisErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisErr::InvalidBounds { low, high } => {
                write!(f, "Invalid sampling bounds, expected low < high but got [{low}, {high}]")
            }
            SynthesisErr::InvalidFraction(eps) => {
                write!(f, "The contamination fraction must lie in [0, 1], got {eps}")
            }
            SynthesisErr::InvalidNoiseLevel(level) => {
                write!(f, "The noise level must be finite and non negative, got {level}")
            }
            SynthesisErr::EmptySampleSet => write!(f, "Tried to operate over an empty sample set"),
            SynthesisErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            SynthesisErr::Distribution(msg) => write!(f, "Failed to build distribution: {msg}"),
        }
    }
}

impl Error for SynthesisErr {}

impl From<NormalError> for SynthesisErr {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for SynthesisErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}
