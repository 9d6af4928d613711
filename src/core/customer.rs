//! Customer record and its format dispatch
//!
//! A [`Customer`] is immutable: the constructor validates once and the fields
//! never change afterwards. Rendering is keyed by short format codes and can
//! be intercepted by a [`LocaleSource`] that carries a custom renderer for the
//! customer type (see [`CustomerFormatProvider`](crate::core::provider::CustomerFormatProvider)).

use std::any::TypeId;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::error::{CustomerError, FormatError};
use crate::core::locale::ambient_locale;
use crate::core::provider::{FormatArg, Formattable, LocaleSource};

/// An immutable customer record.
///
/// `Deserialize` is deliberately not derived: [`Customer::new`] is the only
/// way to obtain an instance, so every live value satisfies the construction
/// invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    name: String,
    contact_phone: String,
    revenue: Decimal,
}

impl Customer {
    /// Format code: name only
    pub const NAME_FORMAT: &'static str = "N";
    /// Format code: phone only
    pub const PHONE_FORMAT: &'static str = "P";
    /// Format code: revenue only
    pub const REVENUE_FORMAT: &'static str = "R";
    /// Format code: all fields
    pub const ALL_FORMAT: &'static str = "NPR";
    /// Format code: general (same output as [`Self::ALL_FORMAT`])
    pub const GENERAL_FORMAT: &'static str = "G";

    /// Create a customer record.
    ///
    /// Fails fast: an empty name or phone and a negative revenue are rejected
    /// before any instance exists.
    pub fn new(
        name: impl Into<String>,
        contact_phone: impl Into<String>,
        revenue: Decimal,
    ) -> Result<Self, CustomerError> {
        let name = name.into();
        let contact_phone = contact_phone.into();

        if name.is_empty() {
            return Err(CustomerError::MissingField { field: "name" });
        }
        if contact_phone.is_empty() {
            return Err(CustomerError::MissingField {
                field: "contact_phone",
            });
        }
        if revenue < Decimal::ZERO {
            return Err(CustomerError::NegativeRevenue { revenue });
        }

        Ok(Self {
            name,
            contact_phone,
            revenue,
        })
    }

    /// The customer's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's contact phone, stored verbatim
    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    /// The customer's revenue
    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    /// Render in the general format under the ambient locale.
    pub fn render(&self) -> Result<String, FormatError> {
        self.render_as_with(Self::GENERAL_FORMAT, &ambient_locale())
    }

    /// Render in the given format under the ambient locale.
    pub fn render_as(&self, format: &str) -> Result<String, FormatError> {
        self.render_as_with(format, &ambient_locale())
    }

    /// Render in the general format under the given source.
    pub fn render_with(&self, source: &dyn LocaleSource) -> Result<String, FormatError> {
        self.render_as_with(Self::GENERAL_FORMAT, source)
    }

    /// Render in the given format under the given source.
    ///
    /// This is the canonical entry point the other three delegate to. An empty
    /// format normalizes to the general code, then the source is probed for a
    /// custom renderer for the customer type: if it supplies one, rendering is
    /// delegated to it entirely and [`Self::format_fields`] is not consulted.
    pub fn render_as_with(
        &self,
        format: &str,
        source: &dyn LocaleSource,
    ) -> Result<String, FormatError> {
        let format = if format.is_empty() {
            Self::GENERAL_FORMAT
        } else {
            format
        };

        if let Some(formatter) = source.formatter_for(TypeId::of::<Customer>()) {
            tracing::trace!(format, "delegating to the source's customer renderer");
            return formatter.format(Some(format), FormatArg::Customer(self), Some(source));
        }

        self.format_fields(format, source)
    }

    /// Core dispatch from format code to rendered text.
    ///
    /// Public so cooperating providers can forward codes they do not recognize
    /// back into the record's own rendering. The empty string normalizes to
    /// the general code; matching is case-insensitive; anything unknown fails
    /// with [`FormatError::Unsupported`] naming the code.
    pub fn format_fields(
        &self,
        format: &str,
        source: &dyn LocaleSource,
    ) -> Result<String, FormatError> {
        let code = if format.is_empty() {
            Self::GENERAL_FORMAT
        } else {
            format
        };

        match code.to_ascii_uppercase().as_str() {
            Self::NAME_FORMAT => Ok(format!("Name: {}", self.name)),
            Self::PHONE_FORMAT => Ok(format!("Phone: {}", self.contact_phone)),
            Self::REVENUE_FORMAT => Ok(format!(
                "Revenue: {}",
                source.locale().format_currency(self.revenue)
            )),
            Self::ALL_FORMAT | Self::GENERAL_FORMAT => Ok(format!(
                "Name: {}, Phone: {}, Revenue: {}",
                self.name,
                self.contact_phone,
                source.locale().format_currency(self.revenue)
            )),
            _ => Err(FormatError::Unsupported {
                code: code.to_string(),
            }),
        }
    }
}

/// General format under the ambient locale, without the provider probe.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .format_fields(Self::GENERAL_FORMAT, &ambient_locale())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Formattable for Customer {
    fn format_with(
        &self,
        format: &str,
        source: &dyn LocaleSource,
    ) -> Result<String, FormatError> {
        self.render_as_with(format, source)
    }
}

// =============================================================================
// Tests
// =============================================================================
