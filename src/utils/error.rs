use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Form file error: {0}")]
    FormFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Form field '{field}' is missing")]
    MissingFieldError { field: String },

    #[error("Invalid value for form field '{field}': '{value}' ({reason})")]
    InvalidFieldValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Result sink error: {message}")]
    SinkError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Config,
    Form,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PredictError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PredictError::ApiError(_) => ErrorCategory::Network,
            PredictError::ConfigError { .. }
            | PredictError::MissingConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::UrlError(_)
            | PredictError::FormFileError(_) => ErrorCategory::Config,
            PredictError::MissingFieldError { .. }
            | PredictError::InvalidFieldValueError { .. } => ErrorCategory::Form,
            PredictError::IoError(_)
            | PredictError::SerializationError(_)
            | PredictError::SinkError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Form => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PredictError::ApiError(_) => {
                "Check that the prediction service is running and the endpoint is reachable"
                    .to_string()
            }
            PredictError::UrlError(_) => {
                "Provide a valid http:// or https:// endpoint URL".to_string()
            }
            PredictError::FormFileError(_) => {
                "Check the form file for TOML syntax errors".to_string()
            }
            PredictError::ConfigError { .. }
            | PredictError::MissingConfigError { .. }
            | PredictError::InvalidConfigValueError { .. } => {
                "Run with --help to review the expected arguments".to_string()
            }
            PredictError::MissingFieldError { field } => {
                format!("Provide a value for '{}' via --{} or the form file", field, field)
            }
            PredictError::InvalidFieldValueError { field, .. } => {
                format!("Check the allowed values for '{}'", field)
            }
            PredictError::IoError(_) => "Check file paths and permissions".to_string(),
            PredictError::SerializationError(_) => {
                "This is likely a bug; please report it".to_string()
            }
            PredictError::SinkError { .. } => {
                "Check that the output destination is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the prediction service: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Form => format!("Form problem: {}", self),
            ErrorCategory::System => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors_are_high_severity() {
        let err = PredictError::MissingFieldError {
            field: "gender".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Form);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("gender"));
    }

    #[test]
    fn test_invalid_field_value_message() {
        let err = PredictError::InvalidFieldValueError {
            field: "age".to_string(),
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("abc"));
    }
}
