use core::fmt;

/// Errors raised while building or rasterizing figures.
#[derive(Debug)]
pub enum PlotError {
    /// The analysis step rejected its input.
    Analysis(quantscope_core::Error),
    /// A rendering argument violated a precondition.
    InvalidInput {
        /// Explaining why the argument was rejected.
        reason: String,
    },
    /// Underlying filesystem I/O failure.
    Io(std::io::Error),
    /// The plotting backend failed to draw.
    Backend(String),
    /// Render settings could not be parsed or serialized.
    Settings(serde_json::Error),
}

impl PlotError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PlotError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Analysis(err) => write!(f, "analysis failed: {err}"),
            PlotError::InvalidInput { reason } => write!(f, "invalid plot input: {reason}"),
            PlotError::Io(err) => write!(f, "plot I/O failure: {err}"),
            PlotError::Backend(msg) => write!(f, "plotting backend failure: {msg}"),
            PlotError::Settings(err) => write!(f, "invalid render settings: {err}"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Analysis(err) => Some(err),
            PlotError::Io(err) => Some(err),
            PlotError::Settings(err) => Some(err),
            PlotError::InvalidInput { .. } | PlotError::Backend(_) => None,
        }
    }
}

impl From<quantscope_core::Error> for PlotError {
    fn from(value: quantscope_core::Error) -> Self {
        PlotError::Analysis(value)
    }
}

impl From<std::io::Error> for PlotError {
    fn from(value: std::io::Error) -> Self {
        PlotError::Io(value)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(value: serde_json::Error) -> Self {
        PlotError::Settings(value)
    }
}
