//! # Error Types
//!
//! Domain-specific error types for carts-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carts-core errors (this file)                                         │
//! │  ├── CoreError        - Cart limit violations                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → API layer response                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail. A missing item is `None`, not an
//! error. These types are produced only by [`crate::validation`], which the
//! API layer runs before calling into the cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart limit errors raised by the boundary checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Adding a new line would exceed the configured item count.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// The resulting line quantity exceeds the configured maximum.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart has X1 × 990, limit 999
    ///      │
    ///      ▼
    /// add X1 × 20  →  QuantityTooLarge { item_id: "X1", requested: 1010, max: 999 }
    /// ```
    #[error("Quantity {requested} for {item_id} exceeds maximum allowed ({max})")]
    QuantityTooLarge {
        item_id: String,
        requested: i64,
        max: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
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

    /// Invalid format (e.g., NaN price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
