//! # frontkit-dom: Platform-Facing Helpers
//!
//! Browser helpers for front-end apps. Each helper takes the browser as a
//! `&dyn Platform`, so the same code runs against a real page, the in-memory
//! [`HeadlessPlatform`] or a mock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         frontkit Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host app (web UI)                            │   │
//! │  │        implements Platform over window / document / navigator  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &dyn Platform                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ frontkit-dom (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  events  │ │   page   │ │ download │ │messaging │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────────────────┐           │   │
//! │  │   │  input   │ │  sniff   │ │ HeadlessPlatform     │           │   │
//! │  │   └──────────┘ └──────────┘ └──────────────────────┘           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 frontkit-core (pure helpers)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`platform`] - The [`Platform`] trait and the values crossing it
//! - [`headless`] - In-memory platform
//! - [`events`] - Custom event publish/subscribe
//! - [`page`] - Scrolling, clipboard, performance marks
//! - [`download`] - File downloads from bytes or a URL
//! - [`messaging`] - Cross-window `postMessage`
//! - [`input`] - Keyboard guards for text inputs
//! - [`sniff`] - Browser and OS names
//! - [`error`] - Error types
//!
//! ## Failure Handling
//!
//! Without a window or document every helper is a no-op (or returns an
//! empty value) and logs at `debug`. Platform failures are logged at
//! `error` and swallowed, except in [`messaging`], which returns them.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod download;
pub mod error;
pub mod events;
pub mod headless;
pub mod input;
pub mod messaging;
pub mod page;
pub mod platform;
pub mod sniff;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use download::{download_file, DownloadConfig, DownloadMethod};
pub use error::{DomError, DomResult};
pub use events::{dispatch_custom_event, listen_to_custom_event, unlisten_to_custom_event};
pub use headless::{DownloadRecord, HeadlessPlatform, PostedMessage};
pub use input::{block_special_chars, ignore_second_decimal_in_input, KeyboardEvent};
pub use messaging::{listen_to_window_messages, post_message_to_window};
pub use page::{
    copy_to_clipboard, performance_mark, performance_measure, scroll_page_to_top,
    smooth_scroll_to_top,
};
pub use platform::{
    Blob, CustomEvent, EventListener, MessageListener, MessageTarget, Platform, WindowMessage,
};
pub use sniff::{browser_name_from_user_agent, get_browser_name, get_os_name, os_name_from};
