//! Locale table and the ambient locale context
//!
//! Culture lookup is a fixed table: rendering needs a currency
//! symbol and two separators per locale, not a CLDR database. The ambient
//! locale is thread-local, so parallel tests and renders never observe each
//! other's overrides.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::error::FormatError;

/// Supported locales for customer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
}

impl Locale {
    /// BCP-47 tag for this locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }

    /// ISO 4217 code of the locale's currency
    pub fn currency_code(&self) -> &'static str {
        match self {
            Locale::EnUs => "USD",
            Locale::EnGb => "GBP",
            Locale::DeDe | Locale::FrFr => "EUR",
        }
    }

    fn currency_symbol(&self) -> &'static str {
        match self {
            Locale::EnUs => "$",
            Locale::EnGb => "£",
            Locale::DeDe | Locale::FrFr => "€",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => ',',
            Locale::DeDe => '.',
            Locale::FrFr => '\u{a0}',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => '.',
            Locale::DeDe | Locale::FrFr => ',',
        }
    }

    /// Whether the currency symbol precedes the amount
    fn symbol_precedes(&self) -> bool {
        matches!(self, Locale::EnUs | Locale::EnGb)
    }

    /// Format a monetary amount in this locale.
    ///
    /// Always renders exactly two fraction digits, rounding half away from
    /// zero, with the locale's grouping and decimal separators and currency
    /// symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use customer::core::locale::Locale;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Decimal::from(1_000_000);
    /// assert_eq!(Locale::EnUs.format_currency(amount), "$1,000,000.00");
    /// assert_eq!(Locale::EnGb.format_currency(amount), "£1,000,000.00");
    /// assert_eq!(Locale::DeDe.format_currency(amount), "1.000.000,00 €");
    /// ```
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (digits.as_str(), "00"),
        };

        let mut number = String::with_capacity(digits.len() + int_part.len() / 3 + 4);
        let count = int_part.chars().count();
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (count - i) % 3 == 0 {
                number.push(self.group_separator());
            }
            number.push(digit);
        }
        number.push(self.decimal_separator());
        number.push_str(frac_part);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        if self.symbol_precedes() {
            format!("{}{}{}", sign, self.currency_symbol(), number)
        } else {
            format!("{}{} {}", sign, number, self.currency_symbol())
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" | "en" => Ok(Locale::EnUs),
            "en-GB" => Ok(Locale::EnGb),
            "de-DE" | "de" => Ok(Locale::DeDe),
            "fr-FR" | "fr" => Ok(Locale::FrFr),
            _ => Err(FormatError::UnknownLocale { tag: s.to_string() }),
        }
    }
}

// =============================================================================
// Ambient locale
// =============================================================================

thread_local! {
    static AMBIENT_LOCALE: Cell<Locale> = const { Cell::new(Locale::EnUs) };
}

/// The current thread's ambient locale.
///
/// Rendering reads this exactly once per call, so a render always observes a
/// single consistent locale even if another part of the thread changes it
/// between calls.
pub fn ambient_locale() -> Locale {
    AMBIENT_LOCALE.with(Cell::get)
}

/// Replace the current thread's ambient locale, returning the previous one.
pub fn set_ambient_locale(locale: Locale) -> Locale {
    AMBIENT_LOCALE.with(|cell| cell.replace(locale))
}

/// RAII override of the ambient locale.
///
/// Restores the previous ambient locale when dropped.
///
/// ```
/// use customer::core::locale::{Locale, ScopedLocale, ambient_locale};
///
/// {
///     let _guard = ScopedLocale::enter(Locale::EnGb);
///     assert_eq!(ambient_locale(), Locale::EnGb);
/// }
/// assert_eq!(ambient_locale(), Locale::EnUs);
/// ```
#[derive(Debug)]
pub struct ScopedLocale {
    previous: Locale,
}

impl ScopedLocale {
    pub fn enter(locale: Locale) -> Self {
        Self {
            previous: set_ambient_locale(locale),
        }
    }
}

impl Drop for ScopedLocale {
    fn drop(&mut self) {
        set_ambient_locale(self.previous);
    }
}

// =============================================================================
// Tests
// =============================================================================
