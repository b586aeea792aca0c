//! # Number Format Configuration
//!
//! The keyed record that drives [`NumberFormatter`](crate::number::NumberFormatter),
//! the shipped presets, and named profiles read from TOML.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Keys set on the record passed to the call (highest priority)       │
//! │     { "toFixedValue": 0 }                                              │
//! │                                                                         │
//! │  2. Profile preset                                                     │
//! │     [profiles.price] preset = "PRICE_CURRENCY"                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     addCommas = true, fallback = "NA", toFixedValue = 2, ...           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown keys are ignored. Missing keys take their defaults.
//!
//! ## Profile File Format
//! ```toml
//! [profiles.price]
//! preset = "PRICE_CURRENCY"
//! toFixedValue = 0
//!
//! [profiles.day_change]
//! withSign = true
//! spaceBetweenSignValue = true
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ConfigError;
use crate::number::CURRENCY_INR;

// =============================================================================
// Number Format Config
// =============================================================================

/// How a number should be formatted.
///
/// Every flag is independent. When several output modes are enabled,
/// [`NumberFormatConfig::output_mode`] decides which one is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NumberFormatConfig {
    /// Indian-style commas (`1,00,000`).
    #[serde(default = "default_true")]
    pub add_commas: bool,

    /// US-style commas (`100,000`), used for US stocks.
    #[serde(default)]
    pub million_commas: bool,

    /// Returned when the input is missing, blank, `NaN` or infinite.
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Fraction digits, `10` → `10.00`.
    #[serde(default = "default_fraction_digits")]
    pub to_fixed_value: u8,

    /// Lakh / crore notation without a currency sign.
    #[serde(default)]
    pub format_to_lakh_crore: bool,

    /// K / M / B / T notation, used for US stocks.
    #[serde(default)]
    pub format_to_billion_trillion: bool,

    /// Fraction digits for lakh / crore notation.
    #[serde(default = "default_fraction_digits")]
    pub decimals: u8,

    /// Currency formatting with `currency`.
    #[serde(default)]
    pub is_currency: bool,

    /// ISO 4217 code, `INR` by default, `USD` for US stocks.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// `-10` → `10`.
    #[serde(default)]
    pub absolute_value: bool,

    /// `83.56` → `84`.
    #[serde(default)]
    pub round_value: bool,

    /// Prefix the sign of the original number, `+21.34`.
    #[serde(default)]
    pub with_sign: bool,

    /// `+ 3.54` instead of `+3.54`. Only applies with `with_sign`.
    #[serde(default)]
    pub space_between_sign_value: bool,

    #[serde(default)]
    pub format_paisa_to_rupee: bool,

    #[serde(default)]
    pub format_rupee_to_paisa: bool,

    /// Return the number itself instead of a string.
    #[serde(default)]
    pub plain_number: bool,
}

fn default_true() -> bool {
    true
}

fn default_fallback() -> String {
    "NA".to_string()
}

fn default_fraction_digits() -> u8 {
    2
}

fn default_currency() -> String {
    CURRENCY_INR.to_string()
}

impl Default for NumberFormatConfig {
    fn default() -> Self {
        NumberFormatConfig {
            add_commas: default_true(),
            million_commas: false,
            fallback: default_fallback(),
            to_fixed_value: default_fraction_digits(),
            format_to_lakh_crore: false,
            format_to_billion_trillion: false,
            decimals: default_fraction_digits(),
            is_currency: false,
            currency: default_currency(),
            absolute_value: false,
            round_value: false,
            with_sign: false,
            space_between_sign_value: false,
            format_paisa_to_rupee: false,
            format_rupee_to_paisa: false,
            plain_number: false,
        }
    }
}

/// The output shape selected by a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    MillionCommas,
    Currency,
    LakhCrore,
    BillionTrillion,
    PlainNumber,
}

impl NumberFormatConfig {
    /// Parses a keyed JSON record, e.g. `{"isCurrency": true}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a keyed TOML record, e.g. `isCurrency = true`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Returns a copy with the keys of `overrides` applied on top.
    ///
    /// ## Example
    /// ```rust
    /// use frontkit_core::config::FormatPreset;
    /// use serde_json::json;
    ///
    /// let config = FormatPreset::PriceCurrency
    ///     .config()
    ///     .with_overrides(&json!({ "toFixedValue": 0 }))
    ///     .unwrap();
    /// assert!(config.is_currency);
    /// assert_eq!(config.to_fixed_value, 0);
    /// ```
    pub fn with_overrides(&self, overrides: &serde_json::Value) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(self)?;

        if let (Some(base), Some(extra)) = (merged.as_object_mut(), overrides.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }

        Ok(serde_json::from_value(merged)?)
    }

    /// The output mode that decides the answer, if any is enabled.
    ///
    /// ## Precedence
    /// ```text
    /// millionCommas > isCurrency > formatToLakhCrore
    ///               > formatToBillionTrillion > plainNumber
    /// ```
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.million_commas {
            Some(OutputMode::MillionCommas)
        } else if self.is_currency {
            Some(OutputMode::Currency)
        } else if self.format_to_lakh_crore {
            Some(OutputMode::LakhCrore)
        } else if self.format_to_billion_trillion {
            Some(OutputMode::BillionTrillion)
        } else if self.plain_number {
            Some(OutputMode::PlainNumber)
        } else {
            None
        }
    }
}

// =============================================================================
// Presets
// =============================================================================

/// The named configs shipped with the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatPreset {
    /// Absolute value of a day change percentage.
    DayChangePercAbs,
    /// Currency with `0` as the fallback.
    PriceCurrencyFallbackZero,
    /// `--` as the fallback.
    PrimaryFallback,
    PlainNumber,
    PriceCurrencyToFixedZero,
    PriceCurrency,
    FixedZero,
    ConvertToLakhCrore,
    PriceCurrencyUsd,
    ConvertToBillionTrillion,
    NoCommas,
    /// Paise in, rupee currency string out.
    CurrencyConvertToRupee,
    FallbackZeroToFixedTwo,
    SignSpaceBetweenSignValue,
}

impl FormatPreset {
    pub const ALL: [FormatPreset; 14] = [
        FormatPreset::DayChangePercAbs,
        FormatPreset::PriceCurrencyFallbackZero,
        FormatPreset::PrimaryFallback,
        FormatPreset::PlainNumber,
        FormatPreset::PriceCurrencyToFixedZero,
        FormatPreset::PriceCurrency,
        FormatPreset::FixedZero,
        FormatPreset::ConvertToLakhCrore,
        FormatPreset::PriceCurrencyUsd,
        FormatPreset::ConvertToBillionTrillion,
        FormatPreset::NoCommas,
        FormatPreset::CurrencyConvertToRupee,
        FormatPreset::FallbackZeroToFixedTwo,
        FormatPreset::SignSpaceBetweenSignValue,
    ];

    /// The SCREAMING_SNAKE name callers use to refer to the preset.
    pub fn name(&self) -> &'static str {
        match self {
            FormatPreset::DayChangePercAbs => "DAY_CHANGE_PERC_ABS",
            FormatPreset::PriceCurrencyFallbackZero => "PRICE_CURRENCY_FALLBACK_ZERO",
            FormatPreset::PrimaryFallback => "PRIMARY_FALLBACK",
            FormatPreset::PlainNumber => "PLAIN_NUMBER",
            FormatPreset::PriceCurrencyToFixedZero => "PRICE_CURRENCY_TO_FIXED_ZERO",
            FormatPreset::PriceCurrency => "PRICE_CURRENCY",
            FormatPreset::FixedZero => "FIXED_ZERO",
            FormatPreset::ConvertToLakhCrore => "CONVERT_TO_LAKH_CRORE",
            FormatPreset::PriceCurrencyUsd => "PRICE_CURRENCY_USD",
            FormatPreset::ConvertToBillionTrillion => "CONVERT_TO_BILLION_TRILLION",
            FormatPreset::NoCommas => "NO_COMMAS",
            FormatPreset::CurrencyConvertToRupee => "CURRENCY_CONVERT_TO_RUPEE",
            FormatPreset::FallbackZeroToFixedTwo => "FALLBACK_ZERO_TO_FIXED_TWO",
            FormatPreset::SignSpaceBetweenSignValue => "SIGN_SPACE_BETWEEN_SIGN_VALUE",
        }
    }

    /// The config this preset stands for.
    pub fn config(&self) -> NumberFormatConfig {
        let base = NumberFormatConfig::default();

        match self {
            FormatPreset::DayChangePercAbs => NumberFormatConfig {
                absolute_value: true,
                ..base
            },
            FormatPreset::PriceCurrencyFallbackZero => NumberFormatConfig {
                is_currency: true,
                fallback: "0".to_string(),
                ..base
            },
            FormatPreset::PrimaryFallback => NumberFormatConfig {
                fallback: "--".to_string(),
                ..base
            },
            FormatPreset::PlainNumber => NumberFormatConfig {
                plain_number: true,
                ..base
            },
            FormatPreset::PriceCurrencyToFixedZero => NumberFormatConfig {
                is_currency: true,
                to_fixed_value: 0,
                ..base
            },
            FormatPreset::PriceCurrency => NumberFormatConfig {
                is_currency: true,
                ..base
            },
            FormatPreset::FixedZero => NumberFormatConfig {
                to_fixed_value: 0,
                ..base
            },
            FormatPreset::ConvertToLakhCrore => NumberFormatConfig {
                format_to_lakh_crore: true,
                ..base
            },
            FormatPreset::PriceCurrencyUsd => NumberFormatConfig {
                is_currency: true,
                currency: "USD".to_string(),
                ..base
            },
            FormatPreset::ConvertToBillionTrillion => NumberFormatConfig {
                format_to_billion_trillion: true,
                ..base
            },
            FormatPreset::NoCommas => NumberFormatConfig {
                add_commas: false,
                ..base
            },
            FormatPreset::CurrencyConvertToRupee => NumberFormatConfig {
                is_currency: true,
                format_paisa_to_rupee: true,
                ..base
            },
            FormatPreset::FallbackZeroToFixedTwo => NumberFormatConfig {
                fallback: "0.00".to_string(),
                ..base
            },
            FormatPreset::SignSpaceBetweenSignValue => NumberFormatConfig {
                with_sign: true,
                space_between_sign_value: true,
                ..base
            },
        }
    }
}

impl std::fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for FormatPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        FormatPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Named configs read from a TOML table.
#[derive(Debug, Clone, Default)]
pub struct FormatProfiles {
    profiles: HashMap<String, NumberFormatConfig>,
}

#[derive(Debug, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: HashMap<String, ProfileEntry>,
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    #[serde(default)]
    preset: Option<String>,

    #[serde(flatten)]
    overrides: toml::Table,
}

impl FormatProfiles {
    /// Reads profiles from TOML text.
    ///
    /// ## Example
    /// ```rust
    /// use frontkit_core::config::FormatProfiles;
    ///
    /// let profiles = FormatProfiles::from_toml_str(r#"
    ///     [profiles.price]
    ///     preset = "PRICE_CURRENCY"
    ///     toFixedValue = 0
    /// "#).unwrap();
    ///
    /// let price = profiles.get("price").unwrap();
    /// assert!(price.is_currency);
    /// assert_eq!(price.to_fixed_value, 0);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ProfilesFile = toml::from_str(text)?;
        let mut profiles = HashMap::with_capacity(file.profiles.len());

        for (name, entry) in file.profiles {
            let base = match entry.preset.as_deref() {
                Some(preset) => preset.parse::<FormatPreset>()?.config(),
                None => NumberFormatConfig::default(),
            };

            let mut merged = toml::Value::try_from(&base)?;
            if let toml::Value::Table(table) = &mut merged {
                for (key, value) in entry.overrides {
                    table.insert(key, value);
                }
            }
            let config: NumberFormatConfig = merged.try_into()?;

            debug!(profile = %name, preset = ?entry.preset, "Loaded number format profile");
            profiles.insert(name, config);
        }

        Ok(FormatProfiles { profiles })
    }

    /// Returns the profile with the given name.
    pub fn get(&self, name: &str) -> Result<&NumberFormatConfig, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
