//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cosmo Stock                            │
//! │                                                                         │
//! │  Graphical layer             Rust Backend                               │
//! │  ───────────────             ────────────                               │
//! │                                                                         │
//! │  add_product(form)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError::Required ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Image Error? ──────── AssetError ──────────────── ApiError ───►│  │
//! │  │         │                                          ▲            │  │
//! │  │         ▼                                          │            │  │
//! │  │  Database Error? ───── DbError::UniqueViolation ───┘            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Dialog shows `message`, branches on `code`.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error is fatal: the command returns and the UI keeps running.

use serde::Serialize;

use cosmo_core::ValidationError;
use cosmo_db::{AssetError, DbError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE_CODE",
///   "message": "Product code 'LIP-02' already exists"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No product with the given id.
    NotFound,

    /// A form field failed validation.
    ValidationError,

    /// Another product already uses the code.
    DuplicateCode,

    /// The store could not complete the operation.
    DatabaseError,

    /// The image could not be read or copied.
    AssetError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a duplicate code error.
    pub fn duplicate_code(code: &str) -> Self {
        ApiError::new(
            ErrorCode::DuplicateCode,
            format!("Product code '{}' already exists", code),
        )
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } if field == "code" => {
                ApiError::duplicate_code(&value)
            }
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database initialization failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts image staging errors to API errors.
impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        tracing::error!(error = %err, "Image staging failed");
        let message = match &err {
            AssetError::SourceUnreadable { path, .. } => {
                format!("Cannot read image: {}", path.display())
            }
            AssetError::InvalidSource { path } => {
                format!("Not an image file: {}", path.display())
            }
            AssetError::DestinationUnwritable { .. } => {
                "Cannot save image to the asset folder".to_string()
            }
        };
        ApiError::new(ErrorCode::AssetError, message)
    }
}

/// Converts form validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
