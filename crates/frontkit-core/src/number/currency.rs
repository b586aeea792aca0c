//! # Currency Formatting
//!
//! Two ways to render a currency amount:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    currency_format(value, code, digits)                 │
//! │                                                                         │
//! │  1. Locale-aware (LocaleCurrencyFormat)                                 │
//! │     en-US for USD, en-IN for everything else                            │
//! │     rounds the shortest decimal form, minus before the symbol           │
//! │        -1000.5 INR → "-₹1,000.50"                                       │
//! │           │                                                             │
//! │           │ unavailable, or code rejected                               │
//! │           ▼                                                             │
//! │  2. Manual                                                              │
//! │     INR → "₹" + Indian commas, USD → "$" + US commas                    │
//! │     rounds with to_fixed, symbol before the minus                       │
//! │        -1000.5 INR → "₹-1,000.50"                                       │
//! │     any other code → no answer                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two paths do not agree on rounding or on where the minus goes. Both
//! are kept as they are.

use tracing::warn;

use super::{adding_commas_to_number, group_every, group_indian, million_with_commas, to_fixed};
use crate::error::{CoreError, CoreResult};

pub const CURRENCY_INR: &str = "INR";
pub const CURRENCY_USD: &str = "USD";

const SYMBOL_INR: &str = "₹";
const SYMBOL_DOLLAR: &str = "$";

/// Locale-aware currency formatting, the capability a host runtime may or
/// may not offer.
pub trait LocaleCurrencyFormat {
    /// Formats `value` as `currency` with exactly `fraction_digits` digits.
    fn format_currency(&self, value: f64, currency: &str, fraction_digits: u8) -> CoreResult<String>;
}

/// Built-in locale-aware formatting for the `en-IN` and `en-US` locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntlCurrencyFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Locale {
    EnIn,
    EnUs,
}

impl Locale {
    fn for_currency(currency: &str) -> Self {
        if currency == CURRENCY_USD {
            Locale::EnUs
        } else {
            Locale::EnIn
        }
    }

    fn symbol(self, code: &str) -> String {
        let symbol = match (self, code) {
            (_, "INR") => "₹",
            (_, "USD") => "$",
            (_, "EUR") => "€",
            (_, "GBP") => "£",
            (_, "JPY") => "¥",
            (Locale::EnUs, "CAD") => "CA$",
            (Locale::EnUs, "AUD") => "A$",
            // Unknown symbols are shown as the code and a no-break space.
            _ => return format!("{}\u{a0}", code),
        };
        symbol.to_string()
    }

    fn group(self, digits: &str) -> String {
        match self {
            Locale::EnIn => group_indian(digits),
            Locale::EnUs => group_every(digits, 3),
        }
    }
}

impl LocaleCurrencyFormat for IntlCurrencyFormat {
    fn format_currency(&self, value: f64, currency: &str, fraction_digits: u8) -> CoreResult<String> {
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::UnsupportedCurrency(currency.to_string()));
        }
        if !value.is_finite() {
            return Err(CoreError::NotANumber(value.to_string()));
        }

        let locale = Locale::for_currency(currency);
        let code = currency.to_ascii_uppercase();
        let rounded = round_half_expand(value.abs(), usize::from(fraction_digits));

        let (integer, fraction) = match rounded.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (rounded.as_str(), None),
        };

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&locale.symbol(&code));
        out.push_str(&locale.group(integer));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }

        Ok(out)
    }
}

/// Rounds the shortest decimal representation of `value` (non-negative) to
/// `digits` places, halves away from zero.
fn round_half_expand(value: f64, digits: usize) -> String {
    let text = format!("{}", value);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    let mut kept: String = fraction.chars().take(digits).collect();
    while kept.len() < digits {
        kept.push('0');
    }

    let truncated = if digits == 0 {
        integer.to_string()
    } else {
        format!("{}.{}", integer, kept)
    };

    if round_up {
        super::increment_decimal(&truncated)
    } else {
        truncated
    }
}

/// Formats a currency amount, preferring the locale-aware path.
///
/// Returns `None` when the manual path has no format for `currency`.
pub(crate) fn currency_format(
    locale: Option<&dyn LocaleCurrencyFormat>,
    value: f64,
    currency: &str,
    fraction_digits: u8,
) -> Option<String> {
    let attempt = match locale {
        Some(locale) => locale.format_currency(value, currency, fraction_digits),
        None => Err(CoreError::LocaleUnavailable),
    };

    match attempt {
        Ok(formatted) => Some(remove_spaces(&formatted)),
        Err(err) => {
            warn!(currency, error = %err, "Falling back to manual currency format");
            manual_currency_format(value, currency, fraction_digits)
        }
    }
}

fn manual_currency_format(value: f64, currency: &str, fraction_digits: u8) -> Option<String> {
    let fixed = to_fixed(value, fraction_digits);

    match currency {
        CURRENCY_INR => Some(format!("{}{}", SYMBOL_INR, adding_commas_to_number(fixed))),
        CURRENCY_USD => Some(format!("{}{}", SYMBOL_DOLLAR, million_with_commas(fixed))),
        _ => None,
    }
}

/// Drops every whitespace character, including no-break spaces.
fn remove_spaces(amount: &str) -> String {
    amount.chars().filter(|c| !c.is_whitespace()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
