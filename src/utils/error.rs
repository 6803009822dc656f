use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Report generation error: {message}")]
    ReportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Report,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EstimatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Input,
            Self::ZipError(_)
            | Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::ReportError { .. } => ErrorCategory::Report,
            Self::IoError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 報表失敗不影響已算出的估價
            ErrorCategory::Report | ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            Self::ZipError(_) => "Retry without --compress to write plain report files".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) | Self::ReportError { .. } => {
                "Retry with the default txt report format".to_string()
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the pricing configuration file for typos and valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Adjust '{}' to a value within its allowed range", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid project details: {}", self),
            ErrorCategory::Report | ErrorCategory::Storage => {
                "Report could not be generated. The estimate shown above is still valid."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_failures_are_not_critical() {
        let err = EstimatorError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("still valid"));
    }

    #[test]
    fn test_invalid_value_suggestion_names_field() {
        let err = EstimatorError::InvalidConfigValueError {
            field: "complexity".to_string(),
            value: "11".to_string(),
            reason: "Value must be between 1 and 10".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("complexity"));
        assert!(err.to_string().contains("'11'"));
    }
}
