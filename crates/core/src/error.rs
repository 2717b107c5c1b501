//! Unified error types for the tutor engine.
//!
//! Error codes:
//! - STORE_001-002: Persistence errors
//! - VALID_001-002: Request validation errors

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Persistence error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// STORE_001: Failed to load persisted state
    LoadFailed,
    /// STORE_002: Failed to save state
    SaveFailed,
}

impl StorageErrorCode {
    /// Get the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LoadFailed => "STORE_001",
            Self::SaveFailed => "STORE_002",
        }
    }

    /// Get the HTTP status code.
    pub fn http_status(&self) -> u16 {
        500
    }
}

/// Validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// VALID_001: Invalid JSON / Invalid format
    InvalidFormat,
    /// VALID_002: Field out of range
    OutOfRange,
}

impl ValidationErrorCode {
    /// Get the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "VALID_001",
            Self::OutOfRange => "VALID_002",
        }
    }

    /// Get the HTTP status code.
    pub fn http_status(&self) -> u16 {
        400
    }
}

/// Unified error type for the tutor engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Persistence error with code.
    #[error("[{code}] {message}")]
    Storage {
        code: &'static str,
        message: String,
        http_status: u16,
    },

    /// Validation error with code.
    #[error("[{code}] {message}")]
    ValidationWithCode {
        code: &'static str,
        message: String,
        http_status: u16,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a persistence error.
    pub fn storage(code: StorageErrorCode, msg: impl Into<String>) -> Self {
        Self::Storage {
            code: code.code(),
            message: msg.into(),
            http_status: code.http_status(),
        }
    }

    /// Create a validation error with code.
    pub fn validation_code(code: ValidationErrorCode, msg: impl Into<String>) -> Self {
        Self::ValidationWithCode {
            code: code.code(),
            message: msg.into(),
            http_status: code.http_status(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Storage { http_status, .. } => *http_status,
            Self::ValidationWithCode { http_status, .. } => *http_status,
            Self::Serialization(_) => 500,
        }
    }

    /// Get the error code if this is a coded error.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Storage { code, .. } => Some(code),
            Self::ValidationWithCode { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::validation_code(ValidationErrorCode::OutOfRange, errors.to_string())
    }
}
