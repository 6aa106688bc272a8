use crate::domain::model::VehicleKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Validation error: {message}")]
    ValidationError { field: String, message: String },

    #[error("Type mismatch: cannot use {actual} as {expected}")]
    TypeMismatch {
        expected: VehicleKind,
        actual: VehicleKind,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    TypeMismatch,
    Configuration,
    System,
}

impl VehicleError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        VehicleError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            VehicleError::ValidationError { .. } => ErrorCategory::Validation,
            VehicleError::TypeMismatch { .. } => ErrorCategory::TypeMismatch,
            VehicleError::ConfigError { .. } | VehicleError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            VehicleError::IoError(_) | VehicleError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 違規欄位名稱 (僅驗證類錯誤)
    pub fn field(&self) -> Option<&str> {
        match self {
            VehicleError::ValidationError { field, .. }
            | VehicleError::ConfigValidationError { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VehicleError::ValidationError { message, .. } => message.clone(),
            VehicleError::TypeMismatch { expected, actual } => {
                format!("A {} cannot be treated as a {}", actual, expected)
            }
            VehicleError::ConfigError { message } => format!("Invalid configuration: {}", message),
            VehicleError::ConfigValidationError { field, message } => {
                format!("Invalid configuration value for '{}': {}", field, message)
            }
            VehicleError::IoError(e) => format!("Could not access a file: {}", e),
            VehicleError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Check the brand, year and variant-specific fields of the vehicle"
            }
            ErrorCategory::TypeMismatch => {
                "Match on the vehicle variant before using variant-specific accessors"
            }
            ErrorCategory::Configuration => {
                "Review the fleet TOML file against the documented layout"
            }
            ErrorCategory::System => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, VehicleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_carries_message() {
        let err = VehicleError::validation("brand", "Brand cannot be null or empty");
        assert_eq!(err.to_string(), "Validation error: Brand cannot be null or empty");
        assert_eq!(err.field(), Some("brand"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = VehicleError::TypeMismatch {
            expected: VehicleKind::Car,
            actual: VehicleKind::Motorcycle,
        };
        assert_eq!(err.to_string(), "Type mismatch: cannot use Motorcycle as Car");
        assert_eq!(err.category(), ErrorCategory::TypeMismatch);
        assert!(err.field().is_none());
    }
}
