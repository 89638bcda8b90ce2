use std::{error::Error, fmt, io, path::PathBuf};

/// The exchange module's result type.
pub type Result<T> = std::result::Result<T, ExchangeErr>;

/// Failures reading or writing exchange files.
#[derive(Debug)]
pub enum ExchangeErr {
    Io(io::Error),
    File {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        line: usize,
        token: String,
    },
    RaggedRow {
        line: usize,
        got: usize,
        expected: usize,
    },
    CountMismatch {
        got: usize,
        expected: usize,
    },
    SizeMismatch {
        features: usize,
        targets: usize,
    },
    NonFinite {
        index: usize,
    },
    Empty,
}

impl fmt::Display for ExchangeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeErr::Io(e) => write!(f, "io error: {e}"),
            ExchangeErr::File { path, source } => {
                write!(f, "cannot access '{}': {source}", path.display())
            }
            ExchangeErr::Parse { line, token } => {
                write!(f, "line {line}: cannot parse '{token}' as a real number")
            }
            ExchangeErr::RaggedRow {
                line,
                got,
                expected,
            } => write!(f, "line {line}: expected {expected} values, got {got}"),
            ExchangeErr::CountMismatch { got, expected } => {
                write!(f, "expected {expected} coefficients, got {got}")
            }
            ExchangeErr::SizeMismatch { features, targets } => write!(
                f,
                "feature rows ({features}) and targets ({targets}) differ in length"
            ),
            ExchangeErr::NonFinite { index } => {
                write!(f, "entry {index} holds a non finite value")
            }
            ExchangeErr::Empty => write!(f, "the exchange file holds no values"),
        }
    }
}

impl Error for ExchangeErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExchangeErr::Io(e) => Some(e),
            ExchangeErr::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ExchangeErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Attaches the offending path to an io error.
pub(crate) fn at(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ExchangeErr {
    let path = path.into();
    move |source| ExchangeErr::File { path, source }
}
