use thiserror::Error;

/// All possible errors in the dysrisk system
#[derive(Debug, Error)]
pub enum DysRiskError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DysRiskError>;

impl DysRiskError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the caller supplied bad data, as opposed to an internal failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = DysRiskError::invalid_input("age", "must not be negative");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input for age: must not be negative"
        );
    }

    #[test]
    fn test_other_errors_are_not_input_errors() {
        assert!(!DysRiskError::config("bad").is_invalid_input());
        assert!(!DysRiskError::classifier("down").is_invalid_input());
    }
}
