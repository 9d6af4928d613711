//! Typed error handling for the customer crate
//!
//! This module provides a small error hierarchy so callers can handle failures
//! specifically rather than dealing with opaque boxed errors.
//!
//! # Error Categories
//!
//! - [`CustomerError`]: Errors raised while constructing a [`Customer`](crate::core::Customer)
//! - [`FormatError`]: Errors raised while rendering
//!
//! Every error is raised at the point of detection and propagates to the caller
//! unchanged. The crate never recovers internally and never substitutes a
//! default rendering for an unsupported code.
//!
//! # Example
//!
//! ```rust,ignore
//! use customer::prelude::*;
//!
//! match customer.render_as("X") {
//!     Ok(text) => println!("{}", text),
//!     Err(FormatError::Unsupported { code }) => {
//!         eprintln!("unknown format code: {}", code);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use std::fmt;

use rust_decimal::Decimal;

/// The main error type for the customer crate
///
/// This enum encompasses all errors the library can raise. Each variant wraps
/// the more specific error type for that category.
#[derive(Debug)]
pub enum Error {
    /// Construction-time validation errors
    Customer(CustomerError),

    /// Rendering errors
    Format(FormatError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Customer(e) => write!(f, "{}", e),
            Error::Format(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Customer(e) => Some(e),
            Error::Format(e) => Some(e),
        }
    }
}

impl Error {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Customer(e) => e.error_code(),
            Error::Format(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Customer Errors
// =============================================================================

/// Errors raised while constructing a customer record
#[derive(Debug)]
pub enum CustomerError {
    /// A required text field was absent or empty
    MissingField { field: &'static str },

    /// Revenue was negative
    NegativeRevenue { revenue: Decimal },
}

impl fmt::Display for CustomerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerError::MissingField { field } => {
                write!(f, "Required field '{}' must not be empty", field)
            }
            CustomerError::NegativeRevenue { revenue } => {
                write!(f, "Revenue {} cannot be negative", revenue)
            }
        }
    }
}

impl std::error::Error for CustomerError {}

impl CustomerError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CustomerError::MissingField { .. } => "MISSING_FIELD",
            CustomerError::NegativeRevenue { .. } => "NEGATIVE_REVENUE",
        }
    }
}

impl From<CustomerError> for Error {
    fn from(err: CustomerError) -> Self {
        Error::Customer(err)
    }
}

// =============================================================================
// Format Errors
// =============================================================================

/// Errors raised while rendering
#[derive(Debug)]
pub enum FormatError {
    /// Format code not recognized by any dispatch stage
    Unsupported { code: String },

    /// Locale tag not present in the built-in locale table
    UnknownLocale { tag: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unsupported { code } => {
                write!(f, "The format code '{}' is not supported", code)
            }
            FormatError::UnknownLocale { tag } => {
                write!(f, "Unknown locale tag: '{}'", tag)
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl FormatError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FormatError::Unsupported { .. } => "UNSUPPORTED_FORMAT",
            FormatError::UnknownLocale { .. } => "UNKNOWN_LOCALE",
        }
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for customer operations
pub type CustomerResult<T> = Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================
