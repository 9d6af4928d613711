//! Format provider protocol and the customer formatting authority
//!
//! A [`LocaleSource`] supplies a locale and answers the capability query:
//! "do you carry a custom renderer for this type?". A bare [`Locale`] is the
//! degenerate source that always declines, so every render path works the same
//! with or without a provider in front.
//!
//! [`CustomerFormatProvider`] wraps a fallback source, intercepts rendering for
//! [`Customer`] values, adds the composite codes `NP` and `NR`, and forwards
//! every other code back into the customer's own dispatch.

use std::any::TypeId;
use std::fmt;

use crate::core::customer::Customer;
use crate::core::error::FormatError;
use crate::core::locale::{Locale, ambient_locale};

/// Supplies locale information and, optionally, type-specific renderers.
pub trait LocaleSource {
    /// The locale this source resolves currency amounts against
    fn locale(&self) -> Locale;

    /// Capability query: a custom renderer for values of `target` type, if any.
    ///
    /// The default answer declines for every type.
    fn formatter_for(&self, target: TypeId) -> Option<&dyn CustomFormatter> {
        let _ = target;
        None
    }
}

impl LocaleSource for Locale {
    fn locale(&self) -> Locale {
        *self
    }
}

/// A renderer a [`LocaleSource`] can hand out for a specific type.
///
/// `format` is `None` when the caller did not supply a code at all; how that
/// absence is normalized is up to the formatter.
pub trait CustomFormatter {
    fn format(
        &self,
        format: Option<&str>,
        value: FormatArg<'_>,
        source: Option<&dyn LocaleSource>,
    ) -> Result<String, FormatError>;
}

/// A value that knows how to render itself for a format code and locale source.
pub trait Formattable {
    fn format_with(&self, format: &str, source: &dyn LocaleSource)
    -> Result<String, FormatError>;
}

/// The value handed to a [`CustomFormatter`].
///
/// Ordered from most to least specific; [`CustomerFormatProvider`] walks the
/// variants in that order and the last two never fail.
pub enum FormatArg<'a> {
    /// A customer record, eligible for composite codes
    Customer(&'a Customer),

    /// Any other format-aware value
    Formattable(&'a dyn Formattable),

    /// A value with only a plain textual representation
    Text(&'a dyn fmt::Display),

    /// No value at all; renders as the empty string
    None,
}

impl<'a> From<&'a Customer> for FormatArg<'a> {
    fn from(customer: &'a Customer) -> Self {
        FormatArg::Customer(customer)
    }
}

/// Formatting authority for [`Customer`] values.
///
/// Holds a single fallback [`LocaleSource`] and nothing else, so one instance
/// can be shared freely across unrelated rendering calls and threads.
pub struct CustomerFormatProvider {
    parent: Box<dyn LocaleSource + Send + Sync>,
}

impl CustomerFormatProvider {
    /// Composite code: name and phone
    pub const NAME_PHONE_FORMAT: &'static str = "NP";
    /// Composite code: name and revenue
    pub const NAME_REVENUE_FORMAT: &'static str = "NR";

    /// Wrap the ambient locale as observed at construction time.
    pub fn new() -> Self {
        Self::with_parent(ambient_locale())
    }

    /// Wrap an explicit fallback source.
    pub fn with_parent(parent: impl LocaleSource + Send + Sync + 'static) -> Self {
        Self {
            parent: Box::new(parent),
        }
    }

    /// Composite-aware dispatch for customer values.
    ///
    /// Codes the provider does not recognize are forwarded to the customer's
    /// own dispatch, where the empty string normalizes to the general format.
    fn format_customer(
        &self,
        format: &str,
        customer: &Customer,
        source: &dyn LocaleSource,
    ) -> Result<String, FormatError> {
        match format.to_ascii_uppercase().as_str() {
            Self::NAME_PHONE_FORMAT => {
                tracing::trace!(format, "rendering composite name/phone code");
                Ok(format!(
                    "Name: {}, Phone: {}",
                    customer.name(),
                    customer.contact_phone()
                ))
            }
            Self::NAME_REVENUE_FORMAT => {
                tracing::trace!(format, "rendering composite name/revenue code");
                Ok(format!(
                    "Name: {}, Revenue: {}",
                    customer.name(),
                    source.locale().format_currency(customer.revenue())
                ))
            }
            _ => {
                tracing::trace!(format, "forwarding code to customer dispatch");
                customer.format_fields(format, source)
            }
        }
    }
}

impl Default for CustomerFormatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleSource for CustomerFormatProvider {
    fn locale(&self) -> Locale {
        self.parent.locale()
    }

    fn formatter_for(&self, target: TypeId) -> Option<&dyn CustomFormatter> {
        if target == TypeId::of::<Customer>() {
            Some(self)
        } else {
            self.parent.formatter_for(target)
        }
    }
}

impl CustomFormatter for CustomerFormatProvider {
    fn format(
        &self,
        format: Option<&str>,
        value: FormatArg<'_>,
        source: Option<&dyn LocaleSource>,
    ) -> Result<String, FormatError> {
        match value {
            FormatArg::Customer(customer) => {
                // A missing code stays the empty string here; the customer
                // dispatch is the stage that maps it to the general format.
                let format = format.unwrap_or_default();
                let source = match source {
                    Some(source) => source,
                    None => self.parent.as_ref() as &dyn LocaleSource,
                };
                self.format_customer(format, customer, source)
            }
            FormatArg::Formattable(value) => {
                value.format_with(format.unwrap_or_default(), &ambient_locale())
            }
            FormatArg::Text(value) => Ok(value.to_string()),
            FormatArg::None => Ok(String::new()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
