//! # Error Types
//!
//! Domain-specific error types for frontkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  frontkit-core errors (this file)                                      │
//! │  ├── CoreError      - Number, date and string failures                 │
//! │  └── ConfigError    - Keyed config records that fail to parse          │
//! │                                                                         │
//! │  frontkit-dom errors (separate crate)                                  │
//! │  └── DomError       - Platform capability failures                     │
//! │                                                                         │
//! │  Flow: helper internals → CoreError → logged → safe fallback value     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Formatting helpers never hand a `CoreError` to their caller; they log
//!    it and return the documented fallback. Only parsing entry points
//!    (config records, profiles) return errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures inside the pure helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input could not be read as a finite number.
    #[error("Not a finite number: '{0}'")]
    NotANumber(String),

    /// Paisa amounts are whole units; a fractional amount cannot be converted.
    ///
    /// ## When This Occurs
    /// ```text
    /// convert_paisa_to_rupee(1050.5)
    ///      │
    ///      ▼
    /// FractionalPaisa(1050.5) → logged, 1050.5 returned unchanged
    /// ```
    #[error("Paisa value must be a whole number, got {0}")]
    FractionalPaisa(f64),

    /// A whole paisa amount too large for an i64.
    #[error("Paisa value out of range: {0}")]
    PaiseOutOfRange(f64),

    /// No locale-aware number formatting is available to this formatter.
    #[error("Locale-aware number formatting is unavailable")]
    LocaleUnavailable,

    /// Locale-aware currency formatting refused the currency code.
    #[error("Unsupported currency code: '{0}'")]
    UnsupportedCurrency(String),

    /// A date string did not match the expected layout.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Object helper received values it cannot order.
    #[error("Cannot compare values of key '{key}'")]
    Incomparable { key: String },

    /// Config error (wraps ConfigError).
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors while reading keyed configuration records.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON record failed to deserialize.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML record failed to deserialize.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be turned into a TOML table for merging.
    #[error("Cannot merge config: {0}")]
    TomlMerge(#[from] toml::ser::Error),

    /// Preset name is not one of the shipped presets.
    #[error("Unknown format preset: '{0}'")]
    UnknownPreset(String),

    /// Named profile does not exist in the loaded table.
    #[error("Unknown format profile: '{0}'")]
    UnknownProfile(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
