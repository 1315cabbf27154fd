use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolveError::IoError(_) => ErrorCategory::Io,
            SolveError::SerializationError(_) => ErrorCategory::Serialization,
            SolveError::ConfigValidationError { .. }
            | SolveError::InvalidConfigValueError { .. }
            | SolveError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SolveError::IoError(_) => ErrorSeverity::Critical,
            SolveError::SerializationError(_) => ErrorSeverity::High,
            SolveError::ConfigValidationError { .. }
            | SolveError::InvalidConfigValueError { .. }
            | SolveError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SolveError::IoError(_) => {
                "Check that the input/output paths exist and are readable/writable".to_string()
            }
            SolveError::SerializationError(_) => {
                "Report rendering failed; try --format plain".to_string()
            }
            SolveError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' setting in your configuration", field)
            }
            SolveError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            SolveError::MissingConfigError { field } => {
                format!("Add the required field '{}' to your configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolveError::IoError(e) => format!("Could not read or write data: {}", e),
            SolveError::SerializationError(_) => "Could not render the result report".to_string(),
            SolveError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            SolveError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            SolveError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
