//! Core module containing the customer record and the formatting protocol

pub mod customer;
pub mod error;
pub mod locale;
pub mod provider;

pub use customer::Customer;
pub use error::{CustomerError, CustomerResult, Error, FormatError};
pub use locale::{Locale, ScopedLocale, ambient_locale, set_ambient_locale};
pub use provider::{CustomFormatter, CustomerFormatProvider, FormatArg, Formattable, LocaleSource};
