use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured error shared by the domain types and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Message for a single form field, if that field failed validation.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Text safe to put in a toast. Validation failures collapse to the
    /// generic form prompt; a bad request shows its own message.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError => "Please fill in all fields".to_string(),
            AppErrorKind::BadRequest => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::bad_request(format!("Invalid portal config: {}", err.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_error_has_correct_kind() {
        let err = AppError::bad_request("Invalid portal config");
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Invalid portal config");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_exposes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "Valid email is required".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some("Valid email is required"));
        assert_eq!(err.field_error("password"), None);
    }

    #[test]
    fn friendly_message_by_kind() {
        assert_eq!(
            AppError::validation("Validation failed", HashMap::new()).friendly_message(),
            "Please fill in all fields"
        );
        assert_eq!(
            AppError::bad_request("Invalid portal config").friendly_message(),
            "Invalid portal config"
        );
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::bad_request("bad config");
        assert_eq!(format!("{}", err), "BadRequest: bad config");
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_value(AppError::bad_request("x")).unwrap();
        assert!(json.get("field_errors").is_none());
    }
}
