//! # frontkit-core: Pure Helpers for Front-End Apps
//!
//! Formatting and validation helpers for numbers, dates and strings, with
//! zero I/O dependencies. Everything that needs a browser lives in
//! `frontkit-dom`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         frontkit Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host app (web UI)                            │   │
//! │  │    price cells ──► day change ──► forms ──► report filters     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ frontkit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  general  │  │  number   │  │   date    │  │  string   │  │   │
//! │  │   │ is_empty  │  │ Formatter │  │   ages    │  │   case    │  │   │
//! │  │   │  get_data │  │  commas   │  │  ranges   │  │  masking  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WINDOW • NO DOCUMENT • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 frontkit-dom (Platform helpers)                 │   │
//! │  │         events, scroll, clipboard, downloads, messaging         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`general`] - Emptiness predicate and JSON record helpers
//! - [`number`] - Comma insertion, scaled formats and the [`NumberFormatter`]
//! - [`config`] - [`NumberFormatConfig`], presets and TOML profiles
//! - [`date`] - Calendar helpers
//! - [`string`] - Case conversion, validation and masking
//! - [`error`] - Error types
//!
//! ## Design Principles
//!
//! 1. **Never throw at the caller**: helpers log through `tracing` and return
//!    a documented fallback (empty string, input unchanged, configured value)
//! 2. **No I/O**: the local clock is the only ambient input, and every
//!    clock-reading helper has an `_on` variant taking the date explicitly
//! 3. **Typed results**: the formatter returns a [`FormattedNumber`], not a
//!    loose value
//!
//! ## Example Usage
//!
//! ```rust
//! use frontkit_core::config::FormatPreset;
//! use frontkit_core::{format_number, is_empty, NumberFormatConfig};
//!
//! assert!(is_empty("   "));
//!
//! let config = NumberFormatConfig::default();
//! assert_eq!(format_number(100023, &config).to_string(), "1,00,023.00");
//!
//! let price = FormatPreset::PriceCurrency.config();
//! assert_eq!(format_number("2500.5", &price).to_string(), "₹2,500.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod date;
pub mod error;
pub mod general;
pub mod number;
pub mod string;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use frontkit_core::NumberFormatter` instead of
// `use frontkit_core::number::NumberFormatter`

pub use config::{FormatPreset, FormatProfiles, NumberFormatConfig};
pub use error::{ConfigError, CoreError, CoreResult};
pub use general::{is_empty, Emptiness};
pub use number::{format_number, FormattedNumber, NumberFormatter, NumberInput, Paise};
