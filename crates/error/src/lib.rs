//! # Groundwork Error Infrastructure
//!
//! Error types and API response handling for the Groundwork application.

pub mod middleware;
pub mod response;
pub mod traits;

pub use middleware::ErrorHandler;
pub use response::ApiResponse;
pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound { message: String },

    #[error("BadRequest: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation: {message}")]
    Validation { message: String },

    #[error("Internal: {message}")]
    Internal { message: String },

    #[error("Database: {message}")]
    Database { message: String },

    #[error("IO: {message}")]
    Io { message: String },

    #[error("Config: {message}")]
    Config { message: String },

    #[error("Migration: {message}")]
    Migration { message: String },

    #[error("Seed: {message}")]
    Seed { message: String },

    #[error("Cancelled: {message}")]
    Cancelled { message: String },
}

/// Seed operation result
#[derive(Debug, Clone)]
pub struct SeedResult {
    /// Number of records inserted
    pub inserted_count: usize,
    /// Number of records updated
    pub updated_count: usize,
    /// Seed name for logging
    pub seed_name: String,
    /// Duration of the seed operation in milliseconds
    pub duration_ms: u64,
    /// Any errors that occurred
    pub errors: Vec<String>,
}

impl SeedResult {
    /// Creates a new successful seed result
    #[must_use]
    pub fn success(seed_name: &str, inserted: usize, duration_ms: u64) -> Self {
        Self {
            inserted_count: inserted,
            updated_count: 0,
            seed_name: seed_name.to_string(),
            duration_ms,
            errors: Vec::new(),
        }
    }

    /// Creates a new failed seed result
    #[must_use]
    pub fn with_error(seed_name: &str, error: &str) -> Self {
        Self {
            inserted_count: 0,
            updated_count: 0,
            seed_name: seed_name.to_string(),
            duration_ms: 0,
            errors: vec![error.to_string()],
        }
    }

    /// Returns true if the seed operation was successful
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a bad request error.
    #[inline]
    pub fn bad_request(message: impl ToString) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a forbidden error.
    #[inline]
    pub fn forbidden(message: impl ToString) -> Self {
        Self::Forbidden {
            message: message.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Create a seed error.
    #[inline]
    pub fn seed(message: impl ToString) -> Self {
        Self::Seed {
            message: message.to_string(),
        }
    }

    /// Create a cancellation error.
    #[inline]
    pub fn cancelled(message: impl ToString) -> Self {
        Self::Cancelled {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound { .. } => http::StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => http::StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => http::StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => http::StatusCode::FORBIDDEN,
            AppError::Conflict { .. } => http::StatusCode::CONFLICT,
            AppError::Validation { .. } => http::StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Seed { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Cancelled { .. } => http::StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::Forbidden { .. } => "FORBIDDEN",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
            AppError::Database { .. } => "DATABASE_ERROR",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Migration { .. } => "MIGRATION_ERROR",
            AppError::Seed { .. } => "SEED_ERROR",
            AppError::Cancelled { .. } => "CANCELLED",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound { message }
            | AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::Conflict { message }
            | AppError::Validation { message }
            | AppError::Internal { message }
            | AppError::Database { message }
            | AppError::Io { message }
            | AppError::Config { message }
            | AppError::Migration { message }
            | AppError::Seed { message }
            | AppError::Cancelled { message } => message.clone(),
        }
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let wrap = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::NotFound { message } => Self::NotFound { message: wrap(message) },
            AppError::BadRequest { message } => Self::BadRequest { message: wrap(message) },
            AppError::Unauthorized { message } => Self::Unauthorized { message: wrap(message) },
            AppError::Forbidden { message } => Self::Forbidden { message: wrap(message) },
            AppError::Conflict { message } => Self::Conflict { message: wrap(message) },
            AppError::Validation { message } => Self::Validation { message: wrap(message) },
            AppError::Internal { message } => Self::Internal { message: wrap(message) },
            AppError::Database { message } => Self::Database { message: wrap(message) },
            AppError::Io { message } => Self::Io { message: wrap(message) },
            AppError::Config { message } => Self::Config { message: wrap(message) },
            AppError::Migration { message } => Self::Migration { message: wrap(message) },
            AppError::Seed { message } => Self::Seed { message: wrap(message) },
            AppError::Cancelled { message } => Self::Cancelled { message: wrap(message) },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert String to AppError.
impl From<String> for AppError {
    fn from(s: String) -> Self {
        Self::BadRequest { message: s }
    }
}

/// Convert &str to AppError.
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // AppError Construction Tests
    #[test]
    fn test_error_not_found() {
        let err = AppError::not_found("User");
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_error_bad_request() {
        let err = AppError::bad_request("Invalid input");
        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_error_conflict() {
        let err = AppError::conflict("Duplicate entry");
        assert_eq!(err.status(), http::StatusCode::CONFLICT);
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_error_validation() {
        let err = AppError::validation("Invalid format");
        assert_eq!(err.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_error_internal() {
        let err = AppError::internal("Something went wrong");
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_database() {
        let err = AppError::database("Connection failed");
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_migration() {
        let err = AppError::migration("Migration failed");
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "MIGRATION_ERROR");
        assert!(err.to_string().contains("Migration"));
    }

    #[test]
    fn test_error_seed() {
        let err = AppError::seed("RoleSeeder failed");
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "SEED_ERROR");
        assert!(err.to_string().contains("Seed"));
    }

    #[test]
    fn test_error_cancelled() {
        let err = AppError::cancelled("shutdown requested");
        assert_eq!(err.status(), http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "CANCELLED");
    }

    // Context Tests
    #[test]
    fn test_error_context_not_found() {
        let err = AppError::not_found("User").context("Fetching user");
        assert!(err.to_string().contains("Fetching user"));
        assert!(err.to_string().contains("User"));
    }

    #[test]
    fn test_error_message_with_context() {
        let err = AppError::not_found("User").context("Fetching");
        assert_eq!(err.message(), "Fetching: User");
    }

    // From Trait Tests
    #[test]
    fn test_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("Test error");
        let err: AppError = anyhow_err.into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: AppError = io_err.into();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_from_str() {
        let err: AppError = "Bad request".into();
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    // SeedResult Tests
    #[test]
    fn test_seed_result_success() {
        let result = SeedResult::success("test_seed", 5, 100);
        assert_eq!(result.inserted_count, 5);
        assert_eq!(result.updated_count, 0);
        assert_eq!(result.seed_name, "test_seed");
        assert_eq!(result.duration_ms, 100);
        assert!(result.errors.is_empty());
        assert!(result.is_success());
    }

    #[test]
    fn test_seed_result_error() {
        let result = SeedResult::with_error("test_seed", "Error message");
        assert_eq!(result.inserted_count, 0);
        assert!(result.errors.contains(&"Error message".to_string()));
        assert!(!result.is_success());
    }
}
