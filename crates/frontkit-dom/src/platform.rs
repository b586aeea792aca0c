//! # Platform Port
//!
//! Everything the DOM helpers need from a browser, behind one trait.
//!
//! ## Capabilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Platform                                                               │
//! │  ├── presence       has_window, has_document, has_performance           │
//! │  ├── events         add / remove / dispatch on the document element     │
//! │  ├── scrolling      scroll_to, smooth_scroll_to                         │
//! │  ├── clipboard      write_clipboard                                     │
//! │  ├── performance    performance_mark, performance_measure               │
//! │  ├── downloads      create / revoke object URL, click a download link   │
//! │  ├── navigator      user_agent, navigator_platform                      │
//! │  └── messaging      post_message, add_message_listener                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations are single-threaded; listeners are `Rc` closures.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomResult;

// =============================================================================
// Platform Types
// =============================================================================

/// An event dispatched on the document element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEvent {
    pub name: String,
    /// Extra data, `{}` when the dispatcher passed none.
    pub detail: Value,
}

/// A message received from another window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowMessage {
    pub origin: String,
    pub data: Value,
}

/// Which window a message is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTarget {
    /// The embedding window (the window itself when not embedded).
    Parent,
    /// The window that opened this one.
    Opener,
    /// The topmost window.
    Top,
}

impl fmt::Display for MessageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageTarget::Parent => "parent",
            MessageTarget::Opener => "opener",
            MessageTarget::Top => "top",
        };
        write!(f, "{}", name)
    }
}

/// File contents tagged with a MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
    pub mime_type: String,
}

pub type EventListener = Rc<dyn Fn(&CustomEvent)>;
pub type MessageListener = Rc<dyn Fn(&WindowMessage)>;

/// True when both handles point at the same listener.
pub(crate) fn same_listener<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

// =============================================================================
// Platform Trait
// =============================================================================

/// Browser capabilities used by the DOM helpers.
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    fn has_window(&self) -> bool;

    fn has_document(&self) -> bool;

    /// Registers `listener` for `event_name` on the document element.
    fn add_event_listener(&self, event_name: &str, listener: EventListener);

    /// Removes a listener previously registered with the same handle.
    fn remove_event_listener(&self, event_name: &str, listener: &EventListener);

    fn dispatch_event(&self, event: &CustomEvent);

    /// Jumps to a scroll position without animation.
    fn scroll_to(&self, x: f64, y: f64);

    /// Animated scroll to `top`. Fails where smooth scrolling is unsupported.
    fn smooth_scroll_to(&self, top: f64) -> DomResult<()>;

    fn write_clipboard(&self, text: &str) -> DomResult<()>;

    /// `window.performance` offers marks and measures.
    fn has_performance(&self) -> bool;

    fn performance_mark(&self, name: &str);

    /// Milliseconds between two marks, `None` if either mark is missing.
    fn performance_measure(&self, start_mark: &str, end_mark: &str) -> Option<f64>;

    fn create_object_url(&self, blob: &Blob) -> DomResult<String>;

    fn revoke_object_url(&self, url: &str);

    /// Adds a temporary `<a download>` link, clicks it and removes it.
    fn click_download_link(&self, href: &str, download_name: &str) -> DomResult<()>;

    /// `navigator.userAgent`, `None` without a navigator.
    fn user_agent(&self) -> Option<String>;

    /// `navigator.platform`, `None` without a navigator.
    fn navigator_platform(&self) -> Option<String>;

    fn post_message(&self, target: MessageTarget, message: &Value, target_origin: &str) -> DomResult<()>;

    fn add_message_listener(&self, listener: MessageListener) -> DomResult<()>;
}
