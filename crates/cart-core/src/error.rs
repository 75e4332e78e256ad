//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                           │
//! │  ├── AmountError   - Decimal text that is not a Money/Weight            │
//! │  └── RecordError   - A persisted line that does not decode              │
//! │                                                                         │
//! │  cart-store errors (separate crate)                                     │
//! │  └── StoreError    - File I/O and configuration failures                │
//! │                                                                         │
//! │  Flow: AmountError → RecordError → StoreError → checkout binary         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT Here
//! There is no validation error. Items accept whatever the caller hands
//! them, and `Cart::total`/`Cart::report` cannot fail.

use thiserror::Error;

// =============================================================================
// Amount Error
// =============================================================================

/// Decimal text could not be turned into a `Money` or `Weight`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("'{input}' is not a decimal number")]
    InvalidFormat { input: String },

    #[error("'{input}' is out of range")]
    Overflow { input: String },
}

// =============================================================================
// Record Error
// =============================================================================

/// A persisted record line could not be decoded.
///
/// ## When This Occurs
/// - The file was edited by hand
/// - A `size` contained a comma when it was written (the record layout
///   does not escape commas)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record is empty")]
    Empty,

    #[error("Record has {found} fields, expected at least 4")]
    TooFewFields { found: usize },

    #[error("Unknown item label: {0}")]
    UnknownLabel(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[source] AmountError),

    #[error("Invalid {field}: '{value}'")]
    InvalidDetail { field: &'static str, value: String },

    #[error("Weight '{0}' is missing the kg suffix")]
    MissingWeightUnit(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
