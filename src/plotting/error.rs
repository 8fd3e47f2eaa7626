//! Error types for plotkit.

use std::fmt;
use std::io;

/// The main error type for plotting and statistics operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Invalid data provided for plotting (missing column, ragged input, ...)
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// An enumerated option token outside its allowed set
    InvalidArgument(String),
    /// Failure reported by the statistics layer
    Stats(String),
    /// Rendering error
    RenderError(String),
    /// Empty data provided where non-empty data is required
    EmptyData,
}

impl PlotError {
    /// Build an `InvalidArgument` error for an unrecognized token.
    pub fn unknown_token(what: &str, token: &str, accepted: &[&str]) -> Self {
        PlotError::InvalidArgument(format!(
            "unrecognized {} '{}' (expected one of: {})",
            what,
            token,
            accepted.join(", ")
        ))
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PlotError::Stats(msg) => write!(f, "Statistics error: {}", msg),
            PlotError::RenderError(msg) => write!(f, "Render error: {}", msg),
            PlotError::EmptyData => write!(f, "Empty data provided"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for plotkit operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_message() {
        let err = PlotError::unknown_token("coordinate space", "pixels", &["data", "axes"]);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid argument"));
        assert!(msg.contains("'pixels'"));
        assert!(msg.contains("data, axes"));
    }
}
