use std::{error::Error, fmt, io};

use exchange::ExchangeErr;
use synthesis::SynthesisErr;

/// The harness' result type.
pub type Result<T> = std::result::Result<T, HarnessErr>;

/// All errors that can abort a benchmark run.
#[derive(Debug)]
pub enum HarnessErr {
    /// Invalid configuration, caught before drawing anything.
    InvalidConfig(String),
    /// Sampling, contamination or evaluation failed.
    Synthesis(SynthesisErr),
    /// An exchange file couldn't be written or read back.
    Exchange(ExchangeErr),
    /// A solver process couldn't be started.
    SolverLaunch { program: String, source: io::Error },
    /// There's no enabled solver to produce the coefficients.
    NoSolver,
    /// A figure couldn't be drawn.
    Render(String),
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for HarnessErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Synthesis(e) => write!(f, "synthesis error: {e}"),
            Self::Exchange(e) => write!(f, "exchange error: {e}"),
            Self::SolverLaunch { program, source } => {
                write!(f, "cannot launch solver '{program}': {source}")
            }
            Self::NoSolver => write!(f, "no solver is enabled"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for HarnessErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Synthesis(e) => Some(e),
            Self::Exchange(e) => Some(e),
            Self::SolverLaunch { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SynthesisErr> for HarnessErr {
    fn from(value: SynthesisErr) -> Self {
        Self::Synthesis(value)
    }
}

impl From<ExchangeErr> for HarnessErr {
    fn from(value: ExchangeErr) -> Self {
        Self::Exchange(value)
    }
}

impl From<io::Error> for HarnessErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Boundary conversion for the binary.
impl From<HarnessErr> for io::Error {
    fn from(value: HarnessErr) -> Self {
        match value {
            HarnessErr::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}
