//! # Custom Events
//!
//! Publish/subscribe between independent parts of a page, through events
//! dispatched on the document element.
//!
//! ```text
//! listen_to_custom_event("file_loaded", on_loaded)
//!                 │
//! dispatch_custom_event("file_loaded", {"user": "Ella"})
//!                 │
//!                 └──► on_loaded(&CustomEvent { name, detail })
//! ```
//!
//! Keep event names in one table of constants; do not scatter literals.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use frontkit_core::is_empty;

use crate::platform::{CustomEvent, EventListener, Platform};

/// Subscribes `callback` to `event_name`. Does nothing without a document.
pub fn listen_to_custom_event(platform: &dyn Platform, event_name: &str, callback: EventListener) {
    if is_empty(event_name) {
        warn!("Refusing to listen to a custom event without a name");
        return;
    }

    if !platform.has_document() {
        debug!(event = event_name, "No document, custom event listener not added");
        return;
    }

    platform.add_event_listener(event_name, callback);
}

/// Dispatches `event_name` with `detail` (`{}` when `None`).
///
/// ## Example
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use frontkit_dom::{dispatch_custom_event, listen_to_custom_event, EventListener, HeadlessPlatform};
/// use serde_json::json;
///
/// let platform = HeadlessPlatform::new();
/// let received = Rc::new(RefCell::new(None));
///
/// let sink = Rc::clone(&received);
/// let on_loaded: EventListener = Rc::new(move |event| *sink.borrow_mut() = Some(event.detail.clone()));
/// listen_to_custom_event(&platform, "file_loaded", on_loaded);
///
/// dispatch_custom_event(&platform, "file_loaded", Some(json!({ "user": "Ella" })));
/// assert_eq!(*received.borrow(), Some(json!({ "user": "Ella" })));
/// ```
pub fn dispatch_custom_event(platform: &dyn Platform, event_name: &str, detail: Option<Value>) {
    if !platform.has_document() {
        debug!(event = event_name, "No document, custom event not dispatched");
        return;
    }

    let event = CustomEvent {
        name: event_name.to_string(),
        detail: detail.unwrap_or_else(|| Value::Object(Map::new())),
    };
    platform.dispatch_event(&event);
}

/// Removes a listener added with [`listen_to_custom_event`]. The same `Rc`
/// handle (or a clone of it) must be passed.
pub fn unlisten_to_custom_event(platform: &dyn Platform, event_name: &str, callback: &EventListener) {
    if !platform.has_document() {
        debug!(event = event_name, "No document, custom event listener not removed");
        return;
    }

    platform.remove_event_listener(event_name, callback);
}
