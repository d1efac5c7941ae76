//! Unified error type for all linelog operations.

/// Error type for linelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from opening or appending to the log file.
    Io(std::io::Error),
    /// The logical log name was empty.
    InvalidName(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidName(name) => write!(f, "invalid log name: '{name}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidName(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
