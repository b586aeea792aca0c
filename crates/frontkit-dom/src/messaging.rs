//! # Cross-Window Messaging
//!
//! `postMessage` between a page and its parent, opener or top window.
//!
//! Unlike the other DOM helpers these return their errors: calling them
//! without a window is a mistake in the calling code.

use std::rc::Rc;

use serde_json::Value;
use tracing::error;

use crate::error::{DomError, DomResult};
use crate::platform::{MessageListener, MessageTarget, Platform, WindowMessage};

/// Posts `message` to `target`, restricted to `target_origin` (`"*"` for
/// any origin).
///
/// ## Example
/// ```rust
/// use frontkit_dom::{post_message_to_window, HeadlessPlatform, MessageTarget};
/// use serde_json::json;
///
/// let platform = HeadlessPlatform::new();
/// post_message_to_window(&platform, MessageTarget::Parent, &json!({ "type": "ready" }), "*").unwrap();
/// assert_eq!(platform.posted_messages().len(), 1);
///
/// let ssr = HeadlessPlatform::new().without_window();
/// assert!(post_message_to_window(&ssr, MessageTarget::Parent, &json!(1), "*").is_err());
/// ```
pub fn post_message_to_window(
    platform: &dyn Platform,
    target: MessageTarget,
    message: &Value,
    target_origin: &str,
) -> DomResult<()> {
    if !platform.has_window() {
        error!(%target, "Cannot post message without a window");
        return Err(DomError::WindowUnavailable);
    }

    platform
        .post_message(target, message, target_origin)
        .inspect_err(|err| error!(%target, error = %err, "Error in posting message to window"))
}

/// Calls `callback` for every message received by this window.
///
/// With `allowed_origin`, messages from any other origin are dropped.
pub fn listen_to_window_messages<F>(
    platform: &dyn Platform,
    allowed_origin: Option<&str>,
    callback: F,
) -> DomResult<()>
where
    F: Fn(&WindowMessage) + 'static,
{
    if !platform.has_window() {
        error!("Cannot listen to window messages without a window");
        return Err(DomError::WindowUnavailable);
    }

    let allowed_origin = allowed_origin.map(str::to_string);
    let listener: MessageListener = Rc::new(move |message: &WindowMessage| {
        match &allowed_origin {
            Some(origin) if *origin != message.origin => {}
            _ => callback(message),
        }
    });

    platform
        .add_message_listener(listener)
        .inspect_err(|err| error!(error = %err, "Error in listening to window messages"))
}
