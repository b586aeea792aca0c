//! # Keyboard Input Guards
//!
//! Key handlers that cancel unwanted keystrokes in text inputs.
//!
//! ```text
//! onKeyPress ──► block_special_chars(&mut event, &["@", "%"])
//! onKeyDown  ──► ignore_second_decimal_in_input(&mut event, current_value)
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The parts of a keyboard event the guards look at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// `KeyboardEvent.key`, e.g. `"a"`, `"."`, `"Backspace"`.
    pub key: String,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        KeyboardEvent {
            key: key.into(),
            default_prevented: false,
        }
    }

    /// Cancels the keystroke.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Cancels keys other than letters, digits, space, `.`, `,`, Backspace and
/// the extra keys in `allowed`.
///
/// Keys are compared as strings, so named keys that sort between `"A"` and
/// `"Z"` (`"Enter"`, `"Tab"`, `"ArrowLeft"`) also pass.
///
/// ## Example
/// ```rust
/// use frontkit_dom::{block_special_chars, KeyboardEvent};
///
/// let mut event = KeyboardEvent::new("#");
/// block_special_chars(&mut event, &["@", "%"]);
/// assert!(event.is_default_prevented());
///
/// let mut event = KeyboardEvent::new("@");
/// block_special_chars(&mut event, &["@", "%"]);
/// assert!(!event.is_default_prevented());
/// ```
pub fn block_special_chars(event: &mut KeyboardEvent, allowed: &[&str]) {
    let k = event.key.as_str();

    let always_allowed = ("a"..="z").contains(&k)
        || ("A"..="Z").contains(&k)
        || ("0"..="9").contains(&k)
        || matches!(k, "Backspace" | " " | "." | ",");

    if !always_allowed && !allowed.contains(&k) {
        event.prevent_default();
    }
}

/// Cancels a `.` when the input already holds one.
pub fn ignore_second_decimal_in_input(event: &mut KeyboardEvent, current_value: impl Display) {
    if event.key == "." && current_value.to_string().contains('.') {
        event.prevent_default();
    }
}
