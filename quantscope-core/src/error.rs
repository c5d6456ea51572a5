use core::fmt;

/// Errors raised by the analysis routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a precondition of the called operation.
    InvalidInput {
        /// Explaining why the input was rejected.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
