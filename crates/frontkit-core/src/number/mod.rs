//! # Number Module
//!
//! Helpers that turn numbers into display strings, and the
//! [`NumberFormatter`] dispatcher that composes them.
//!
//! ## Grouping Systems
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INDIAN (lakh / crore)                 WESTERN (million)                │
//! │  ──────────────────────                ─────────────────                │
//! │  last 3 digits, then every 2           every 3 digits                   │
//! │                                                                         │
//! │        1,00,000   (1 lakh)                     100,000                  │
//! │     1,00,00,000   (1 crore)                 10,000,000                  │
//! │    -1,11,111.50                            -111,111.50                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use frontkit_core::number::{adding_commas_to_number, million_with_commas};
//!
//! assert_eq!(adding_commas_to_number(-111111), "-1,11,111");
//! assert_eq!(million_with_commas("1234567.89"), "1,234,567.89");
//! ```

pub mod currency;
pub mod formatter;
pub mod paise;

use std::borrow::Cow;
use std::fmt;

use tracing::{error, warn};

use crate::error::{CoreError, CoreResult};
use crate::general::Emptiness;

pub use currency::{IntlCurrencyFormat, LocaleCurrencyFormat, CURRENCY_INR, CURRENCY_USD};
pub use formatter::{format_number, FormattedNumber, NumberFormatter};
pub use paise::Paise;

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// JavaScript's `toFixed` accepts at most 100 fraction digits.
const MAX_FRACTION_DIGITS: u8 = 100;

// =============================================================================
// Number Input
// =============================================================================

/// A number or numeric string handed over by calling code.
///
/// Text is read the way a browser reads `Number(text)`: surrounding
/// whitespace is ignored and `0x`/`0o`/`0b` prefixes are honoured.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput<'a> {
    Number(f64),
    Text(Cow<'a, str>),
    Missing,
}

impl NumberInput<'_> {
    /// Numeric value, `NaN` when the input does not read as a number.
    pub fn to_f64(&self) -> f64 {
        match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(text) => parse_js_number(text),
            NumberInput::Missing => f64::NAN,
        }
    }

    /// Textual form used by the comma helpers.
    pub fn to_text(&self) -> String {
        match self {
            NumberInput::Number(n) => js_number_string(*n),
            NumberInput::Text(text) => text.to_string(),
            NumberInput::Missing => String::new(),
        }
    }
}

impl Emptiness for NumberInput<'_> {
    fn is_empty_value(&self) -> bool {
        match self {
            NumberInput::Number(_) => false,
            NumberInput::Text(text) => text.is_empty_value(),
            NumberInput::Missing => true,
        }
    }
}

impl fmt::Display for NumberInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Number(n) => write!(f, "{}", js_number_string(*n)),
            NumberInput::Text(text) => write!(f, "{}", text),
            NumberInput::Missing => write!(f, "undefined"),
        }
    }
}

macro_rules! number_input_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberInput<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    NumberInput::Number(value as f64)
                }
            }
        )*
    };
}

number_input_from!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        NumberInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        NumberInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for NumberInput<'_> {
    fn from(value: String) -> Self {
        NumberInput::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<NumberInput<'a>>> From<Option<T>> for NumberInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumberInput::Missing, Into::into)
    }
}

fn parse_js_number(text: &str) -> f64 {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix).map_or(f64::NAN, |n| n as f64);
    }

    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Shortest round-trip text of a number, without a `-` on negative zero.
pub(crate) fn js_number_string(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Formats `value` with exactly `digits` fraction digits, the way
/// JavaScript's `Number.prototype.toFixed` does.
///
/// Rounding works on the exact binary value, and an exact tie rounds away
/// from zero, so `to_fixed(2.5, 0)` is `"3"` while `to_fixed(1.005, 2)` is
/// `"1.00"` (1.005 is stored as 1.00499999...).
///
/// ## Example
/// ```rust
/// use frontkit_core::number::to_fixed;
///
/// assert_eq!(to_fixed(10.0, 2), "10.00");
/// assert_eq!(to_fixed(1.125, 2), "1.13");
/// assert_eq!(to_fixed(-0.5, 0), "-1");
/// ```
pub fn to_fixed(value: f64, digits: u8) -> String {
    if !value.is_finite() {
        return js_number_string(value);
    }

    let digits = usize::from(digits.min(MAX_FRACTION_DIGITS));
    let magnitude = value.abs();

    // 40 extra digits is far below the spacing of neighbouring doubles, so
    // a "5000..." tail only shows up for an exact tie.
    const GUARD_DIGITS: usize = 40;
    let padded = format!("{:.*}", digits + GUARD_DIGITS, magnitude);
    let (head, tail) = padded.split_at(padded.len() - GUARD_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let body = if is_tie {
        let truncated = head.strip_suffix('.').unwrap_or(head);
        increment_decimal(truncated)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Adds one unit in the last place of a plain decimal string.
fn increment_decimal(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut carry = true;

    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }

    let mut result = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        result.insert(0, '1');
    }
    result
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `js_round(2.5) == 3.0`, `js_round(-2.5) == -2.0`.
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// =============================================================================
// Sign
// =============================================================================

/// Returns `"+"` for positive numbers, `"-"` for negative numbers and an
/// empty string for zero or `NaN`.
pub fn get_number_sign(value: f64) -> &'static str {
    if value > 0.0 {
        "+"
    } else if value < 0.0 {
        "-"
    } else {
        ""
    }
}

// =============================================================================
// Comma Insertion
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    Western,
}

/// Adds commas as per the Indian numbering system.
///
/// Strings are accepted as long as they read as a number. Invalid input is
/// logged and an empty string is returned.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::adding_commas_to_number;
///
/// assert_eq!(adding_commas_to_number(1), "1");
/// assert_eq!(adding_commas_to_number(111), "111");
/// assert_eq!(adding_commas_to_number("-1111"), "-1,111");
/// assert_eq!(adding_commas_to_number("11111"), "11,111");
/// assert_eq!(adding_commas_to_number(-111111), "-1,11,111");
/// assert_eq!(adding_commas_to_number("100023.00"), "1,00,023.00");
/// ```
pub fn adding_commas_to_number<'a>(x: impl Into<NumberInput<'a>>) -> String {
    let x = x.into();
    insert_commas(&x, Grouping::Indian).unwrap_or_else(|err| {
        error!(input = %x, error = %err, "Unable to insert commas to the number");
        String::new()
    })
}

/// Adds commas every three digits (US style).
///
/// ## Example
/// ```rust
/// use frontkit_core::number::million_with_commas;
///
/// assert_eq!(million_with_commas(1234567), "1,234,567");
/// assert_eq!(million_with_commas("-9876543.210"), "-9,876,543.210");
/// ```
pub fn million_with_commas<'a>(x: impl Into<NumberInput<'a>>) -> String {
    let x = x.into();
    insert_commas(&x, Grouping::Western).unwrap_or_else(|err| {
        error!(input = %x, error = %err, "Unable to insert million commas to the number");
        String::new()
    })
}

fn insert_commas(x: &NumberInput<'_>, grouping: Grouping) -> CoreResult<String> {
    if x.is_empty_value() || !x.to_f64().is_finite() {
        return Err(CoreError::NotANumber(x.to_text()));
    }

    let text = x.to_text();
    let (is_negative, unsigned) = match text.trim().strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (false, text.trim().to_string()),
    };

    let after_point = match unsigned.find('.') {
        Some(idx) if idx > 0 => &unsigned[idx..],
        _ => "",
    };

    let integer = parse_js_number(&unsigned).floor();
    let digits = format!("{:.0}", integer);

    let grouped = match grouping {
        Grouping::Indian => group_indian(&digits),
        Grouping::Western => group_every(&digits, 3),
    };

    let sign = if is_negative { "-" } else { "" };
    Ok(format!("{}{}{}", sign, grouped, after_point))
}

/// Last three digits form a group, everything before it is grouped in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (others, last_three) = digits.split_at(digits.len() - 3);
    format!("{},{}", group_every(others, 2), last_three)
}

fn group_every(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

// =============================================================================
// Paisa / Rupee
// =============================================================================

/// Converts paise to rupees (divides by 100).
///
/// Paise are whole units. A fractional input is logged and returned
/// unchanged.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::{convert_paisa_to_rupee, convert_rupee_to_paisa};
///
/// assert_eq!(convert_paisa_to_rupee(10050.0), 100.5);
/// assert_eq!(convert_paisa_to_rupee(10.5), 10.5);
/// assert_eq!(convert_paisa_to_rupee(1e17), 1e15);
/// assert_eq!(convert_rupee_to_paisa(convert_paisa_to_rupee(10000.0)), 10000.0);
/// ```
pub fn convert_paisa_to_rupee(paisa: f64) -> f64 {
    match Paise::try_from_f64(paisa) {
        Ok(amount) => amount.rupees(),
        // Whole, just wider than an i64.
        Err(CoreError::PaiseOutOfRange(_)) => paisa / 100.0,
        Err(err) => {
            warn!(input = paisa, error = %err, "Paisa value not converted to rupee");
            paisa
        }
    }
}

/// Converts rupees to paise (multiplies by 100).
///
/// The product keeps any fractional paise. Float noise from the scaling
/// (`1.15 * 100 = 114.99999999999999`) is cleaned by rounding to 15
/// significant digits.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::convert_rupee_to_paisa;
///
/// assert_eq!(convert_rupee_to_paisa(1.15), 115.0);
/// assert_eq!(convert_rupee_to_paisa(1.2345), 123.45);
/// assert_eq!(convert_rupee_to_paisa(1e20), 1e22);
/// ```
pub fn convert_rupee_to_paisa(rupee: f64) -> f64 {
    let paisa = rupee * 100.0;
    if !paisa.is_finite() {
        warn!(input = rupee, "Rupee value not converted to paisa");
        return paisa;
    }

    round_to_significant(paisa, 15)
}

/// Rounds to `digits` significant digits through the decimal exponent
/// form, which is exact for any finite input.
fn round_to_significant(value: f64, digits: usize) -> f64 {
    format!("{:.*e}", digits.saturating_sub(1), value)
        .parse()
        .unwrap_or(value)
}

// =============================================================================
// Scaled Formats
// =============================================================================

/// Converts a number to lakh (`L`) / crore (`Cr`) notation with the given
/// number of decimals. Amounts below one lakh get Indian commas.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::change_format_to_lakh_crore;
///
/// assert_eq!(change_format_to_lakh_crore(25_000_000.0, 2), "2.50 Cr");
/// assert_eq!(change_format_to_lakh_crore(150_000.0, 1), "1.5 L");
/// assert_eq!(change_format_to_lakh_crore(99_999.0, 2), "99,999.00");
/// ```
pub fn change_format_to_lakh_crore(value: f64, decimals: u8) -> String {
    let magnitude = value.abs();

    if magnitude >= CRORE {
        format!("{} Cr", to_fixed(value / CRORE, decimals))
    } else if magnitude >= LAKH {
        format!("{} L", to_fixed(value / LAKH, decimals))
    } else {
        adding_commas_to_number(to_fixed(value, decimals))
    }
}

/// Converts a number to `K` / `M` / `B` / `T` notation (US stocks).
///
/// Returns an empty string when the value cannot be scaled.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::convert_to_billion_trillion_format;
///
/// assert_eq!(convert_to_billion_trillion_format(1_500_000_000.0, 2), "1.50B");
/// assert_eq!(convert_to_billion_trillion_format(2_340_000.0, 1), "2.3M");
/// assert_eq!(convert_to_billion_trillion_format(950.0, 2), "950.00");
/// assert_eq!(convert_to_billion_trillion_format(f64::NAN, 2), "");
/// ```
pub fn convert_to_billion_trillion_format(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        warn!(input = value, "Unable to convert to billion/trillion format");
        return String::new();
    }

    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let magnitude = value.abs();
    SCALES
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .map(|(threshold, suffix)| format!("{}{}", to_fixed(value / threshold, decimals), suffix))
        .unwrap_or_else(|| to_fixed(value, decimals))
}

// =============================================================================
// Ordinals
// =============================================================================

/// Appends the English ordinal suffix.
///
/// ## Example
/// ```rust
/// use frontkit_core::number::ordinal_suffix_of_number;
///
/// assert_eq!(ordinal_suffix_of_number(1), "1st");
/// assert_eq!(ordinal_suffix_of_number(11), "11th");
/// assert_eq!(ordinal_suffix_of_number(21), "21st");
/// assert_eq!(ordinal_suffix_of_number(101), "101st");
/// ```
pub fn ordinal_suffix_of_number(n: i64) -> String {
    let last = (n % 10).abs();
    let last_two = (n % 100).abs();

    let suffix = match (last, last_two) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{}{}", n, suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input_parsing() {
        assert_eq!(NumberInput::from(" 12 ").to_f64(), 12.0);
        assert_eq!(NumberInput::from("1e3").to_f64(), 1000.0);
        assert_eq!(NumberInput::from("0x10").to_f64(), 16.0);
        assert!(NumberInput::from("12abc").to_f64().is_nan());
        assert!(NumberInput::from("inf").to_f64().is_nan());
        assert!(NumberInput::from("-Infinity").to_f64().is_infinite());
        assert!(NumberInput::from(None::<f64>).to_f64().is_nan());
        assert_eq!(NumberInput::from(Some(5)).to_f64(), 5.0);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(10.0, 2), "10.00");
        assert_eq!(to_fixed(100023.0, 2), "100023.00");
        assert_eq!(to_fixed(83.56, 0), "84");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.125, 2), "1.13");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(-1.5, 0), "-2");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(0.0, 3), "0.000");
    }

    #[test]
    fn test_increment_decimal() {
        assert_eq!(increment_decimal("1.12"), "1.13");
        assert_eq!(increment_decimal("9.99"), "10.00");
        assert_eq!(increment_decimal("99"), "100");
    }

    #[test]
    fn test_js_round() {
        assert_eq!(js_round(83.56), 84.0);
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
    }

    #[test]
    fn test_get_number_sign() {
        assert_eq!(get_number_sign(21.34), "+");
        assert_eq!(get_number_sign(-0.5), "-");
        assert_eq!(get_number_sign(0.0), "");
        assert_eq!(get_number_sign(f64::NAN), "");
    }

    #[test]
    fn test_adding_commas_to_number() {
        assert_eq!(adding_commas_to_number(1), "1");
        assert_eq!(adding_commas_to_number(11), "11");
        assert_eq!(adding_commas_to_number(111), "111");
        assert_eq!(adding_commas_to_number("-1111"), "-1,111");
        assert_eq!(adding_commas_to_number("11111"), "11,111");
        assert_eq!(adding_commas_to_number(-111111), "-1,11,111");
        assert_eq!(adding_commas_to_number(10000000), "1,00,00,000");
        assert_eq!(adding_commas_to_number(1234567.891), "12,34,567.891");
        assert_eq!(adding_commas_to_number("-1234567.50"), "-12,34,567.50");
    }

    #[test]
    fn test_adding_commas_to_number_invalid_input() {
        assert_eq!(adding_commas_to_number(""), "");
        assert_eq!(adding_commas_to_number("abc"), "");
        assert_eq!(adding_commas_to_number(f64::NAN), "");
        assert_eq!(adding_commas_to_number(None::<i32>), "");
    }

    #[test]
    fn test_million_with_commas() {
        assert_eq!(million_with_commas(100), "100");
        assert_eq!(million_with_commas(1000), "1,000");
        assert_eq!(million_with_commas("100000.00"), "100,000.00");
        assert_eq!(million_with_commas(-1234567), "-1,234,567");
        assert_eq!(million_with_commas("x"), "");
    }

    #[test]
    fn test_paisa_rupee_round_trip() {
        assert_eq!(convert_rupee_to_paisa(convert_paisa_to_rupee(10000.0)), 10000.0);
        assert_eq!(convert_paisa_to_rupee(-250.0), -2.5);
        assert_eq!(convert_rupee_to_paisa(1.15), 115.0);
    }

    #[test]
    fn test_rupee_to_paisa_keeps_fractional_paise() {
        assert_eq!(convert_rupee_to_paisa(1.2345), 123.45);
        assert_eq!(convert_rupee_to_paisa(-0.019), -1.9);
        assert_eq!(convert_rupee_to_paisa(0.001), 0.1);
    }

    #[test]
    fn test_rupee_to_paisa_beyond_i64_range() {
        // i64::MAX / 100 is about 9.2e16 rupees.
        assert_eq!(convert_rupee_to_paisa(1e17), 1e19);
        assert_eq!(convert_rupee_to_paisa(1e20), 1e22);
        assert_eq!(convert_rupee_to_paisa(-3.5e300), -3.5e302);
        assert!(convert_rupee_to_paisa(f64::NAN).is_nan());
    }

    #[test]
    fn test_paisa_to_rupee_large_whole_amounts() {
        assert_eq!(convert_paisa_to_rupee(1e17), 1e15);
        assert_eq!(convert_paisa_to_rupee(1e20), 1e18);
        assert_eq!(convert_paisa_to_rupee(-1e20), -1e18);
    }

    #[test]
    fn test_fractional_paisa_is_returned_unchanged() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        assert_eq!(convert_paisa_to_rupee(1050.5), 1050.5);
    }

    #[test]
    fn test_change_format_to_lakh_crore() {
        assert_eq!(change_format_to_lakh_crore(10_000_000.0, 2), "1.00 Cr");
        assert_eq!(change_format_to_lakh_crore(-35_000_000.0, 1), "-3.5 Cr");
        assert_eq!(change_format_to_lakh_crore(100_000.0, 2), "1.00 L");
        assert_eq!(change_format_to_lakh_crore(5_432.1, 2), "5,432.10");
        assert_eq!(change_format_to_lakh_crore(12.0, 0), "12");
    }

    #[test]
    fn test_convert_to_billion_trillion_format() {
        assert_eq!(convert_to_billion_trillion_format(3.2e12, 2), "3.20T");
        assert_eq!(convert_to_billion_trillion_format(-4.5e9, 1), "-4.5B");
        assert_eq!(convert_to_billion_trillion_format(1_000_000.0, 0), "1M");
        assert_eq!(convert_to_billion_trillion_format(1_500.0, 2), "1.50K");
        assert_eq!(convert_to_billion_trillion_format(999.0, 2), "999.00");
        assert_eq!(convert_to_billion_trillion_format(f64::INFINITY, 2), "");
    }

    #[test]
    fn test_ordinal_suffix_of_number() {
        assert_eq!(ordinal_suffix_of_number(2), "2nd");
        assert_eq!(ordinal_suffix_of_number(3), "3rd");
        assert_eq!(ordinal_suffix_of_number(4), "4th");
        assert_eq!(ordinal_suffix_of_number(11), "11th");
        assert_eq!(ordinal_suffix_of_number(12), "12th");
        assert_eq!(ordinal_suffix_of_number(13), "13th");
        assert_eq!(ordinal_suffix_of_number(21), "21st");
        assert_eq!(ordinal_suffix_of_number(22), "22nd");
        assert_eq!(ordinal_suffix_of_number(101), "101st");
        assert_eq!(ordinal_suffix_of_number(111), "111th");
        assert_eq!(ordinal_suffix_of_number(0), "0th");
    }
}
