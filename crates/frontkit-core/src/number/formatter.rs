//! # Number Formatter
//!
//! Turns a number (or numeric string) into display text according to a
//! [`NumberFormatConfig`], with a configured fallback for bad input.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input ──► empty / NaN / ±∞ ? ──yes──► Fallback(config.fallback)        │
//! │                 │ no                                                    │
//! │                 ▼                                                       │
//! │  capture sign (+ / - / "")                                              │
//! │                 ▼                                                       │
//! │  abs (absoluteValue or withSign) → round → paisa↔rupee                  │
//! │                 ▼                                                       │
//! │  output mode:  millionCommas > isCurrency > lakhCrore                   │
//! │                > billionTrillion > plainNumber                          │
//! │                 │ no answer                                             │
//! │                 ▼                                                       │
//! │  addCommas ? Indian commas : toFixed                                    │
//! │                 ▼                                                       │
//! │  withSign ? captured sign + [space] + result                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use frontkit_core::config::NumberFormatConfig;
//! use frontkit_core::number::format_number;
//!
//! let config = NumberFormatConfig::default();
//! assert_eq!(format_number(100023, &config).to_string(), "1,00,023.00");
//! assert_eq!(format_number(None::<f64>, &config).to_string(), "NA");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use super::currency::{currency_format, IntlCurrencyFormat, LocaleCurrencyFormat};
use super::{
    adding_commas_to_number, change_format_to_lakh_crore, convert_paisa_to_rupee,
    convert_rupee_to_paisa, convert_to_billion_trillion_format, get_number_sign, js_number_string,
    js_round, million_with_commas, to_fixed, NumberInput,
};
use crate::config::{NumberFormatConfig, OutputMode};
use crate::general::Emptiness;

// =============================================================================
// Formatted Number
// =============================================================================

/// What the formatter hands back.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum FormattedNumber {
    /// The configured fallback, for missing or non-finite input.
    Fallback(String),
    /// The number itself (`plainNumber`).
    Plain(f64),
    /// Display text.
    Formatted(String),
}

impl FormattedNumber {
    /// The text of a string result, `None` for [`FormattedNumber::Plain`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormattedNumber::Fallback(s) | FormattedNumber::Formatted(s) => Some(s),
            FormattedNumber::Plain(_) => None,
        }
    }

    /// The number of a [`FormattedNumber::Plain`] result.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormattedNumber::Plain(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FormattedNumber::Fallback(_))
    }

    /// Prefixes `sign`, leaving the value untouched when the sign is empty.
    fn with_sign(self, sign: &str, space_between: bool) -> Self {
        if sign.is_empty() {
            return self;
        }

        let separator = if space_between { " " } else { "" };
        match self {
            FormattedNumber::Fallback(s) => {
                FormattedNumber::Fallback(format!("{}{}{}", sign, separator, s))
            }
            other => FormattedNumber::Formatted(format!("{}{}{}", sign, separator, other)),
        }
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedNumber::Fallback(s) | FormattedNumber::Formatted(s) => write!(f, "{}", s),
            FormattedNumber::Plain(n) => write!(f, "{}", js_number_string(*n)),
        }
    }
}

impl Emptiness for FormattedNumber {
    fn is_empty_value(&self) -> bool {
        match self {
            FormattedNumber::Fallback(s) | FormattedNumber::Formatted(s) => s.is_empty_value(),
            FormattedNumber::Plain(_) => false,
        }
    }
}

// =============================================================================
// Number Formatter
// =============================================================================

/// The number formatting dispatcher.
///
/// Holds the locale-aware currency capability. A formatter built with
/// [`NumberFormatter::without_locale_support`] always takes the manual
/// currency path.
#[derive(Clone)]
pub struct NumberFormatter {
    locale: Option<Arc<dyn LocaleCurrencyFormat + Send + Sync>>,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter::with_locale(IntlCurrencyFormat)
    }
}

impl fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("locale_support", &self.locale.is_some())
            .finish()
    }
}

impl NumberFormatter {
    /// Formatter with the built-in `en-IN` / `en-US` currency support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter backed by a host-provided locale capability.
    pub fn with_locale(locale: impl LocaleCurrencyFormat + Send + Sync + 'static) -> Self {
        NumberFormatter {
            locale: Some(Arc::new(locale)),
        }
    }

    /// Formatter for runtimes without locale-aware number formatting.
    pub fn without_locale_support() -> Self {
        NumberFormatter { locale: None }
    }

    /// Formats `num` according to `config`. Never fails: bad input becomes
    /// the configured fallback.
    ///
    /// ## Example
    /// ```rust
    /// use frontkit_core::config::{FormatPreset, NumberFormatConfig};
    /// use frontkit_core::number::NumberFormatter;
    ///
    /// let formatter = NumberFormatter::new();
    ///
    /// let usd = FormatPreset::PriceCurrencyUsd.config();
    /// assert_eq!(formatter.format(1234567.891, &usd).to_string(), "$1,234,567.89");
    ///
    /// let signed = NumberFormatConfig { with_sign: true, ..Default::default() };
    /// assert_eq!(formatter.format(-3.54, &signed).to_string(), "-3.54");
    /// ```
    pub fn format<'a>(&self, num: impl Into<NumberInput<'a>>, config: &NumberFormatConfig) -> FormattedNumber {
        let input = num.into();
        let value = input.to_f64();

        if input.is_empty_value() || !value.is_finite() {
            debug!(input = %input, fallback = %config.fallback, "Number formatter fell back");
            // The sign of an invalid value is empty, so with_sign is a no-op.
            return FormattedNumber::Fallback(config.fallback.clone());
        }

        let sign = get_number_sign(value);

        let mut working = if config.absolute_value || config.with_sign {
            value.abs()
        } else {
            value
        };

        if config.round_value {
            working = js_round(working);
        }
        if config.format_paisa_to_rupee {
            working = convert_paisa_to_rupee(working);
        }
        if config.format_rupee_to_paisa {
            working = convert_rupee_to_paisa(working);
        }

        let result = match self.output_mode_answer(working, config) {
            Some(answer) => answer,
            None if config.add_commas => {
                FormattedNumber::Formatted(adding_commas_to_number(to_fixed(working, config.to_fixed_value)))
            }
            None => FormattedNumber::Formatted(to_fixed(working, config.to_fixed_value)),
        };

        if config.with_sign {
            result.with_sign(sign, config.space_between_sign_value)
        } else {
            result
        }
    }

    fn output_mode_answer(&self, value: f64, config: &NumberFormatConfig) -> Option<FormattedNumber> {
        let answer = match config.output_mode()? {
            OutputMode::MillionCommas => {
                FormattedNumber::Formatted(million_with_commas(to_fixed(value, config.to_fixed_value)))
            }
            OutputMode::Currency => {
                let locale = self.locale.as_deref().map(|l| l as &dyn LocaleCurrencyFormat);
                FormattedNumber::Formatted(currency_format(
                    locale,
                    value,
                    &config.currency,
                    config.to_fixed_value,
                )?)
            }
            OutputMode::LakhCrore => {
                FormattedNumber::Formatted(change_format_to_lakh_crore(value, config.decimals))
            }
            OutputMode::BillionTrillion => {
                let scaled = convert_to_billion_trillion_format(value, config.to_fixed_value);
                if scaled.is_empty() {
                    FormattedNumber::Fallback(config.fallback.clone())
                } else {
                    FormattedNumber::Formatted(scaled)
                }
            }
            OutputMode::PlainNumber => FormattedNumber::Plain(value),
        };

        (!answer.is_empty_value()).then_some(answer)
    }
}

/// Formats `num` with a default [`NumberFormatter`].
pub fn format_number<'a>(num: impl Into<NumberInput<'a>>, config: &NumberFormatConfig) -> FormattedNumber {
    NumberFormatter::default().format(num, config)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatPreset;

    fn fmt(num: impl Into<NumberInput<'static>>, config: &NumberFormatConfig) -> String {
        format_number(num, config).to_string()
    }

    #[test]
    fn test_default_config() {
        let config = NumberFormatConfig::default();
        assert_eq!(fmt(100023, &config), "1,00,023.00");
        assert_eq!(fmt("100023", &config), "1,00,023.00");
        assert_eq!(fmt(-1234.5, &config), "-1,234.50");
        assert_eq!(fmt(0, &config), "0.00");
    }

    #[test]
    fn test_fallback_on_invalid_input() {
        let config = NumberFormatConfig::default();
        assert_eq!(format_number(None::<f64>, &config), FormattedNumber::Fallback("NA".into()));
        assert_eq!(format_number("", &config), FormattedNumber::Fallback("NA".into()));
        assert_eq!(format_number("null", &config), FormattedNumber::Fallback("NA".into()));
        assert_eq!(format_number("abc", &config), FormattedNumber::Fallback("NA".into()));
        assert_eq!(format_number(f64::INFINITY, &config), FormattedNumber::Fallback("NA".into()));

        let signed = NumberFormatConfig {
            with_sign: true,
            fallback: "--".to_string(),
            ..Default::default()
        };
        assert_eq!(format_number(f64::NAN, &signed), FormattedNumber::Fallback("--".into()));
    }

    #[test]
    fn test_no_commas_and_fixed() {
        assert_eq!(fmt(100023.456, &FormatPreset::NoCommas.config()), "100023.46");
        assert_eq!(fmt(100023.456, &FormatPreset::FixedZero.config()), "1,00,023");
    }

    #[test]
    fn test_absolute_and_round() {
        let abs = FormatPreset::DayChangePercAbs.config();
        assert_eq!(fmt(-10, &abs), "10.00");

        let round = NumberFormatConfig {
            round_value: true,
            ..Default::default()
        };
        assert_eq!(fmt(83.56, &round), "84.00");
        assert_eq!(fmt(-2.5, &round), "-2.00");
    }

    #[test]
    fn test_with_sign_uses_original_sign() {
        let signed = NumberFormatConfig {
            with_sign: true,
            ..Default::default()
        };
        assert_eq!(fmt(21.34, &signed), "+21.34");
        assert_eq!(fmt(-21.34, &signed), "-21.34");
        assert_eq!(fmt(0, &signed), "0.00");

        let spaced = FormatPreset::SignSpaceBetweenSignValue.config();
        assert_eq!(fmt(3.54, &spaced), "+ 3.54");
        assert_eq!(fmt(-123456, &spaced), "- 1,23,456.00");
    }

    #[test]
    fn test_plain_number() {
        let plain = FormatPreset::PlainNumber.config();
        assert_eq!(format_number("12.5", &plain), FormattedNumber::Plain(12.5));
        assert_eq!(format_number(0, &plain), FormattedNumber::Plain(0.0));

        let signed = NumberFormatConfig {
            plain_number: true,
            with_sign: true,
            ..Default::default()
        };
        assert_eq!(format_number(-7, &signed), FormattedNumber::Formatted("-7".into()));
    }

    #[test]
    fn test_currency_wins_over_plain_number() {
        let config = NumberFormatConfig {
            plain_number: true,
            is_currency: true,
            ..Default::default()
        };
        assert_eq!(fmt(1500, &config), "₹1,500.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(fmt(100023, &FormatPreset::PriceCurrency.config()), "₹1,00,023.00");
        assert_eq!(fmt(100023.4, &FormatPreset::PriceCurrencyToFixedZero.config()), "₹1,00,023");
        assert_eq!(fmt(-1000.5, &FormatPreset::PriceCurrency.config()), "-₹1,000.50");
        assert_eq!(fmt(1234567, &FormatPreset::PriceCurrencyUsd.config()), "$1,234,567.00");
        assert_eq!(fmt(None::<i32>, &FormatPreset::PriceCurrencyFallbackZero.config()), "0");
    }

    #[test]
    fn test_currency_without_locale_support() {
        let formatter = NumberFormatter::without_locale_support();
        let inr = FormatPreset::PriceCurrency.config();
        assert_eq!(formatter.format(-1000.5, &inr).to_string(), "₹-1,000.50");

        let usd = FormatPreset::PriceCurrencyUsd.config();
        assert_eq!(formatter.format(1234567, &usd).to_string(), "$1,234,567.00");

        // No manual format for EUR: falls through to Indian commas.
        let eur = NumberFormatConfig {
            is_currency: true,
            currency: "EUR".to_string(),
            ..Default::default()
        };
        assert_eq!(formatter.format(100000, &eur).to_string(), "1,00,000.00");
    }

    #[test]
    fn test_currency_convert_to_rupee() {
        let config = FormatPreset::CurrencyConvertToRupee.config();
        assert_eq!(fmt(1234550, &config), "₹12,345.50");
        // Fractional paise are left as they are.
        assert_eq!(fmt(10.5, &config), "₹10.50");
    }

    #[test]
    fn test_rupee_to_paisa() {
        let config = NumberFormatConfig {
            format_rupee_to_paisa: true,
            to_fixed_value: 0,
            ..Default::default()
        };
        assert_eq!(fmt(1.15, &config), "115");

        let two_places = NumberFormatConfig {
            format_rupee_to_paisa: true,
            to_fixed_value: 2,
            ..Default::default()
        };
        assert_eq!(fmt(1.2345, &two_places), "123.45");
        assert_eq!(fmt(1e20, &two_places), fmt(1e22, &NumberFormatConfig::default()));
    }

    #[test]
    fn test_lakh_crore() {
        let config = FormatPreset::ConvertToLakhCrore.config();
        assert_eq!(fmt(25_000_000, &config), "2.50 Cr");
        assert_eq!(fmt(550_000, &config), "5.50 L");

        let signed = NumberFormatConfig {
            with_sign: true,
            ..config
        };
        assert_eq!(fmt(-25_000_000, &signed), "-2.50 Cr");
    }

    #[test]
    fn test_billion_trillion() {
        let config = FormatPreset::ConvertToBillionTrillion.config();
        assert_eq!(fmt(2_500_000_000_i64, &config), "2.50B");
        assert_eq!(fmt(4_100_000_000_000_i64, &config), "4.10T");
    }

    #[test]
    fn test_million_commas() {
        let config = NumberFormatConfig {
            million_commas: true,
            ..Default::default()
        };
        assert_eq!(fmt(1234567.891, &config), "1,234,567.89");
    }

    #[test]
    fn test_formatter_debug() {
        assert_eq!(
            format!("{:?}", NumberFormatter::without_locale_support()),
            "NumberFormatter { locale_support: false }"
        );
    }
}
