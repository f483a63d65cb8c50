//! # Error Types
//!
//! Domain-specific error types for gilded-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gilded-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gilded-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  gilded-service errors (separate crate)                                │
//! │  └── ServiceError     - What the UI shell sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ServiceError → Shell    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table id, item name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item cannot be found.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    /// Table cannot be found.
    #[error("Table not found: {0}")]
    TableNotFound(i64),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// Not enough tracked inventory to prepare a menu item.
    ///
    /// ## When This Occurs
    /// - A recipe-linked stock has fewer units than the link requires
    /// - The stock row referenced by a recipe link is missing entirely
    ///
    /// ## User Workflow
    /// ```text
    /// Add Ribeye Steak to order
    ///      │
    ///      ▼
    /// Check recipe links: Steak Meat needs 1, on hand 0
    ///      │
    ///      ▼
    /// InsufficientStock { item: "Ribeye Steak", stock: "Steak Meat", .. }
    ///      │
    ///      ▼
    /// Shell shows: "Not enough ingredients to make this item!"
    /// ```
    #[error("Insufficient stock for {item}: {stock} has {available}, needs {required}")]
    InsufficientStock {
        item: String,
        stock: String,
        available: i64,
        required: i64,
    },

    /// Table is not in a state that allows the requested transition.
    ///
    /// ## When This Occurs
    /// - Reserving a table that is not Free
    /// - Cancelling a reservation on a table that is not Reserved
    /// - Clearing a table that is not Dirty
    /// - Adding items to a Dirty table
    #[error("Table {table_id} is {current_status}, cannot perform operation")]
    InvalidTableStatus {
        table_id: i64,
        current_status: String,
    },

    /// Order is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Sending a Completed order to the kitchen
    /// - Checking out an order that is already Completed
    #[error("Order {order_id} is {current_status}, cannot perform operation")]
    InvalidOrderStatus {
        order_id: i64,
        current_status: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (unexpected characters, bad shape).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate username).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            item: "Ribeye Steak".to_string(),
            stock: "Steak Meat".to_string(),
            available: 0,
            required: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Ribeye Steak: Steak Meat has 0, needs 1"
        );

        let err = CoreError::InvalidTableStatus {
            table_id: 5,
            current_status: "Dirty".to_string(),
        };
        assert_eq!(err.to_string(), "Table 5 is Dirty, cannot perform operation");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "guest name".to_string(),
        };
        assert_eq!(err.to_string(), "guest name is required");

        let err = ValidationError::TooLong {
            field: "username".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "username must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "guest name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
