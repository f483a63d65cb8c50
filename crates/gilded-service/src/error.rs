//! # Service Error Type
//!
//! Unified error type for service functions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in the Gilded Fork                           │
//! │                                                                         │
//! │  UI Shell                    Service Layer                              │
//! │  ────────                    ─────────────                              │
//! │                                                                         │
//! │  addItemToTable(...)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Function                                                │  │
//! │  │  ServiceResult<T>                                                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::QueryFailed("...") ──┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Business Guard? ── CoreError::InsufficientStock ─ ServiceError ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "Table 5 is Dirty, cannot perform operation"          │
//! │    // e.code = "BUSINESS_LOGIC"                                         │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Service errors cross the shell boundary as JSON, so they carry both a
//! machine-readable `code` and a human-readable `message`.

use gilded_core::CoreError;
use gilded_db::DbError;
use serde::Serialize;
use ts_rs::TS;

/// Error returned from service functions.
///
/// ## Serialization
/// This is what the shell receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Table not found: 21"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ServiceError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for service responses.
///
/// ## Usage in the Shell
/// ```typescript
/// try {
///   await addItemToTable({ tableId, menuItemId });
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_STOCK':
///       showNotification(e.message);
///       break;
///     case 'FORBIDDEN':
///       showLoginScreen();
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,

    /// Business logic error (422)
    BusinessLogic,

    /// Insufficient stock to prepare a menu item
    InsufficientStock,

    /// Sign-in rejected (unknown user or wrong password, never
    /// distinguished)
    InvalidCredentials,

    /// Caller has no session, or the session lacks the required role
    Forbidden,

    /// Internal server error (500)
    Internal,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ServiceError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Internal, message)
    }

    /// Creates the sign-in rejection error.
    ///
    /// The message is identical for an unknown username and a wrong
    /// password so the login screen cannot be used to enumerate staff
    /// accounts.
    pub fn invalid_credentials() -> Self {
        ServiceError::new(ErrorCode::InvalidCredentials, "Invalid username or password")
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Forbidden, message)
    }
}

/// Converts core errors to service errors.
impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ServiceError::not_found("Menu item", &id.to_string()),
            CoreError::TableNotFound(id) => ServiceError::not_found("Table", &id.to_string()),
            CoreError::OrderNotFound(id) => ServiceError::not_found("Order", &id.to_string()),
            CoreError::InsufficientStock { .. } => {
                // The core Display string already names item, stock and counts
                ServiceError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::InvalidTableStatus { .. } | CoreError::InvalidOrderStatus { .. } => {
                ServiceError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ServiceError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to service errors.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Domain(core) => ServiceError::from(core),
            DbError::NotFound { entity, id } => ServiceError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ServiceError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database bootstrap failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ServiceError::new(ErrorCode::ValidationError, "Invalid reference")
            }
            DbError::PoolExhausted => {
                ServiceError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<gilded_core::ValidationError> for ServiceError {
    fn from(err: gilded_core::ValidationError) -> Self {
        ServiceError::validation(err.to_string())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Result type for service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
