// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the prediction front end.

use std::fmt;

/// Result type alias for predictor operations.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Main error type for the prediction front end.
#[derive(Debug)]
pub enum PredictorError {
    /// Error loading the model artifact (missing file, malformed JSON,
    /// incompatible schema).
    ModelLoadError(String),
    /// The loaded model violated the prediction contract at runtime.
    PredictionError(String),
    /// Malformed interactive input where a number was required.
    InputError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::PredictionError(msg) => write!(f, "Prediction error: {msg}"),
            Self::InputError(msg) => write!(f, "Input error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PredictorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredictorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
