use std::{error::Error, fmt, io};

use exchange::ExchangeErr;

/// The solver's result type.
pub type Result<T> = std::result::Result<T, OlsErr>;

/// Least squares failures.
#[derive(Debug)]
pub enum OlsErr {
    Exchange(ExchangeErr),
    Underdetermined { samples: usize, coefficients: usize },
    Singular { column: usize },
}

impl fmt::Display for OlsErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OlsErr::Exchange(e) => write!(f, "exchange error: {e}"),
            OlsErr::Underdetermined {
                samples,
                coefficients,
            } => write!(
                f,
                "cannot fit {coefficients} coefficients from only {samples} samples"
            ),
            OlsErr::Singular { column } => {
                write!(f, "the normal equations are singular at column {column}")
            }
        }
    }
}

impl Error for OlsErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OlsErr::Exchange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExchangeErr> for OlsErr {
    fn from(value: ExchangeErr) -> Self {
        Self::Exchange(value)
    }
}

/// Boundary conversion for the binary.
impl From<OlsErr> for io::Error {
    fn from(value: OlsErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}
