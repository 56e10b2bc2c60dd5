use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectrumError {
    /// `weights` and `wavelengths` disagree in length.
    #[error("'weights' and 'wavelengths' arrays must have the same size (expected {expected}, got {actual})")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("{class}::{operation}(): not implemented!")]
    Unimplemented {
        class: &'static str,
        operation: &'static str,
    },

    #[error("While parsing {key}: could not parse floating point value '{token}'")]
    Parse { key: String, token: String },

    #[error("missing required parameter \"{0}\"")]
    MissingParameter(String),

    #[error("unknown parameter \"{0}\"")]
    UnknownParameter(String),

    #[error("unknown plugin type \"{0}\"")]
    UnknownPlugin(String),

    #[error("{0}")]
    Config(String),
}

impl SpectrumError {
    pub fn unimplemented(class: &'static str, operation: &'static str) -> Self {
        SpectrumError::Unimplemented { class, operation }
    }

    pub fn config(msg: &str) -> Self {
        SpectrumError::Config(String::from(msg))
    }
}

impl From<std::io::Error> for SpectrumError {
    fn from(value: std::io::Error) -> Self {
        let msg = value.to_string();
        return SpectrumError::config(&msg);
    }
}

impl From<serde_json::Error> for SpectrumError {
    fn from(value: serde_json::Error) -> Self {
        let msg = value.to_string();
        return SpectrumError::config(&msg);
    }
}
