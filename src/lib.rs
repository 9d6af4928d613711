//! # Customer-RS
//!
//! A small library for rendering customer records as locale-aware, human-readable
//! strings, driven by short format codes and pluggable format providers.
//!
//! ## Features
//!
//! - **Immutable Records**: `Customer` validates once at construction and never changes
//! - **Format Codes**: `N`, `P`, `R`, `NPR`/`G` select which fields to render
//! - **Pluggable Providers**: A provider can intercept rendering for the customer
//!   type and add composite codes (`NP`, `NR`) without touching the record itself
//! - **Locale-Aware Currency**: Revenue renders with the symbol and separators of
//!   the effective locale, always with two fraction digits
//! - **Ambient Locale**: A thread-local default locale with scoped overrides
//! - **Typed Errors**: Construction and rendering failures are explicit enums
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use customer::prelude::*;
//!
//! let customer = Customer::new(
//!     "Jeffrey Richter",
//!     "+1 (425) 555-0100",
//!     Decimal::from(1_000_000),
//! )?;
//!
//! // Ambient locale (en-US by default)
//! customer.render()?;
//! // "Name: Jeffrey Richter, Phone: +1 (425) 555-0100, Revenue: $1,000,000.00"
//!
//! // Explicit locale
//! customer.render_as_with("R", &Locale::EnGb)?;
//! // "Revenue: £1,000,000.00"
//!
//! // Composite codes via a provider
//! let provider = CustomerFormatProvider::with_parent(Locale::EnUs);
//! customer.render_as_with("NP", &provider)?;
//! // "Name: Jeffrey Richter, Phone: +1 (425) 555-0100"
//! ```

pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        customer::Customer,
        error::{CustomerError, CustomerResult, Error, FormatError},
        locale::{Locale, ScopedLocale, ambient_locale, set_ambient_locale},
        provider::{CustomFormatter, CustomerFormatProvider, FormatArg, Formattable, LocaleSource},
    };

    // === External dependencies ===
    pub use rust_decimal::Decimal;
}
