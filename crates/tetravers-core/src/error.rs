//! Error types for Le Tétravers

use thiserror::Error;

/// PostgreSQL error code for a unique constraint violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// Main error type for Tétravers operations
#[derive(Error, Debug)]
pub enum TetraversError {
    /// A required configuration value is absent or empty
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    /// A configuration value is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request never produced a usable HTTP response
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with an error payload
    #[error("Backend error{}: {message}", code_suffix(.code))]
    Backend {
        /// PostgreSQL / PostgREST error code, when the backend supplied one
        code: Option<String>,
        message: String,
    },

    /// A row could not be converted to or from its record type
    #[error("Decode error: {0}")]
    Decode(String),

    /// User input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TetraversError {
    /// Whether this error is a duplicate-key rejection from the backend.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, TetraversError::Backend { code: Some(code), .. } if code == UNIQUE_VIOLATION)
    }
}

impl From<serde_json::Error> for TetraversError {
    fn from(err: serde_json::Error) -> Self {
        TetraversError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for TetraversError {
    fn from(err: reqwest::Error) -> Self {
        TetraversError::Request(err.to_string())
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default()
}

/// Result type alias using TetraversError
pub type TetraversResult<T> = Result<T, TetraversError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TetraversError::MissingConfig("SUPABASE_URL");
        assert_eq!(format!("{}", err), "Missing configuration: SUPABASE_URL");
    }

    #[test]
    fn test_backend_display_with_and_without_code() {
        let err = TetraversError::Backend {
            code: Some("42P01".to_string()),
            message: "relation does not exist".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error [42P01]: relation does not exist");

        let err = TetraversError::Backend {
            code: None,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error: bad gateway");
    }

    #[test]
    fn test_unique_violation_detection() {
        let duplicate = TetraversError::Backend {
            code: Some(UNIQUE_VIOLATION.to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert!(duplicate.is_unique_violation());

        let other = TetraversError::Backend {
            code: Some("23502".to_string()),
            message: "null value".to_string(),
        };
        assert!(!other.is_unique_violation());
        assert!(!TetraversError::Request("timeout".to_string()).is_unique_violation());
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: TetraversError = json_err.into();
        assert!(matches!(err, TetraversError::Decode(_)));
    }
}
