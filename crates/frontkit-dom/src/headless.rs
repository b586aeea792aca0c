//! # Headless Platform
//!
//! An in-memory [`Platform`] for server-side rendering, command-line tools
//! and tests. It records every side effect so callers can inspect it.
//!
//! ## Usage
//! ```rust
//! use frontkit_dom::{copy_to_clipboard, scroll_page_to_top, HeadlessPlatform};
//!
//! let platform = HeadlessPlatform::new();
//! platform.set_scroll_position(0.0, 480.0);
//!
//! scroll_page_to_top(&platform);
//! assert_eq!(platform.scroll_position(), (0.0, 0.0));
//!
//! assert!(copy_to_clipboard(&platform, "URN: 2303232923"));
//! assert_eq!(platform.clipboard().as_deref(), Some("URN: 2303232923"));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::Value;

use crate::error::{DomError, DomResult};
use crate::platform::{
    same_listener, Blob, CustomEvent, EventListener, MessageListener, MessageTarget, Platform,
    WindowMessage,
};

/// A link click recorded by [`HeadlessPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub href: String,
    pub file_name: String,
}

/// A message recorded by [`HeadlessPlatform::post_message`].
#[derive(Debug, Clone, PartialEq)]
pub struct PostedMessage {
    pub target: MessageTarget,
    pub message: Value,
    pub target_origin: String,
}

/// In-memory browser.
pub struct HeadlessPlatform {
    window: bool,
    document: bool,
    smooth_scroll: bool,
    clipboard_enabled: bool,
    performance: bool,
    opener: bool,
    user_agent: Option<String>,
    navigator_platform: Option<String>,

    listeners: RefCell<HashMap<String, Vec<EventListener>>>,
    scroll: Cell<(f64, f64)>,
    clipboard: RefCell<Option<String>>,

    clock_ms: Cell<f64>,
    marks: RefCell<HashMap<String, f64>>,

    next_object_url: Cell<u64>,
    object_urls: RefCell<HashMap<String, Blob>>,
    downloads: RefCell<Vec<DownloadRecord>>,

    posted: RefCell<Vec<PostedMessage>>,
    message_listeners: RefCell<Vec<MessageListener>>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        HeadlessPlatform {
            window: true,
            document: true,
            smooth_scroll: true,
            clipboard_enabled: true,
            performance: true,
            opener: false,
            user_agent: None,
            navigator_platform: None,
            listeners: RefCell::new(HashMap::new()),
            scroll: Cell::new((0.0, 0.0)),
            clipboard: RefCell::new(None),
            clock_ms: Cell::new(0.0),
            marks: RefCell::new(HashMap::new()),
            next_object_url: Cell::new(1),
            object_urls: RefCell::new(HashMap::new()),
            downloads: RefCell::new(Vec::new()),
            posted: RefCell::new(Vec::new()),
            message_listeners: RefCell::new(Vec::new()),
        }
    }
}

impl HeadlessPlatform {
    /// A window with a document, smooth scrolling, a clipboard and a
    /// performance timeline, but no navigator.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// No window and no document, like server-side rendering.
    pub fn without_window(mut self) -> Self {
        self.window = false;
        self.document = false;
        self
    }

    pub fn without_document(mut self) -> Self {
        self.document = false;
        self
    }

    pub fn without_smooth_scroll(mut self) -> Self {
        self.smooth_scroll = false;
        self
    }

    pub fn without_clipboard(mut self) -> Self {
        self.clipboard_enabled = false;
        self
    }

    pub fn without_performance(mut self) -> Self {
        self.performance = false;
        self
    }

    /// Marks the window as opened by another window.
    pub fn with_opener(mut self) -> Self {
        self.opener = true;
        self
    }

    pub fn with_navigator(mut self, user_agent: &str, platform: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self.navigator_platform = Some(platform.to_string());
        self
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn scroll_position(&self) -> (f64, f64) {
        self.scroll.get()
    }

    pub fn set_scroll_position(&self, x: f64, y: f64) {
        self.scroll.set((x, y));
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.borrow().get(event_name).map_or(0, Vec::len)
    }

    /// Moves the performance clock forward.
    pub fn advance_clock(&self, ms: f64) {
        self.clock_ms.set(self.clock_ms.get() + ms);
    }

    pub fn downloads(&self) -> Vec<DownloadRecord> {
        self.downloads.borrow().clone()
    }

    /// Object URLs that have been created and not yet revoked.
    pub fn live_object_urls(&self) -> usize {
        self.object_urls.borrow().len()
    }

    pub fn posted_messages(&self) -> Vec<PostedMessage> {
        self.posted.borrow().clone()
    }

    /// Delivers `message` to every window message listener.
    pub fn deliver_message(&self, message: &WindowMessage) {
        let listeners = self.message_listeners.borrow().clone();
        for listener in listeners {
            listener(message);
        }
    }
}

impl Platform for HeadlessPlatform {
    fn has_window(&self) -> bool {
        self.window
    }

    fn has_document(&self) -> bool {
        self.document
    }

    fn add_event_listener(&self, event_name: &str, listener: EventListener) {
        let mut listeners = self.listeners.borrow_mut();
        let registered = listeners.entry(event_name.to_string()).or_default();

        // Registering the same listener twice has no effect.
        if !registered.iter().any(|l| same_listener(l, &listener)) {
            registered.push(listener);
        }
    }

    fn remove_event_listener(&self, event_name: &str, listener: &EventListener) {
        if let Some(registered) = self.listeners.borrow_mut().get_mut(event_name) {
            registered.retain(|l| !same_listener(l, listener));
        }
    }

    fn dispatch_event(&self, event: &CustomEvent) {
        // Cloned so listeners may (un)register while the event is dispatched.
        let listeners = self
            .listeners
            .borrow()
            .get(&event.name)
            .cloned()
            .unwrap_or_default();

        for listener in listeners {
            listener(event);
        }
    }

    fn scroll_to(&self, x: f64, y: f64) {
        self.scroll.set((x, y));
    }

    fn smooth_scroll_to(&self, top: f64) -> DomResult<()> {
        if !self.smooth_scroll {
            return Err(DomError::Scroll("smooth behavior is not supported".to_string()));
        }

        let (x, _) = self.scroll.get();
        self.scroll.set((x, top));
        Ok(())
    }

    fn write_clipboard(&self, text: &str) -> DomResult<()> {
        if !self.clipboard_enabled {
            return Err(DomError::Clipboard("clipboard is not available".to_string()));
        }

        *self.clipboard.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn has_performance(&self) -> bool {
        self.performance
    }

    fn performance_mark(&self, name: &str) {
        self.marks
            .borrow_mut()
            .insert(name.to_string(), self.clock_ms.get());
    }

    fn performance_measure(&self, start_mark: &str, end_mark: &str) -> Option<f64> {
        let marks = self.marks.borrow();
        Some(marks.get(end_mark)? - marks.get(start_mark)?)
    }

    fn create_object_url(&self, blob: &Blob) -> DomResult<String> {
        let id = self.next_object_url.get();
        self.next_object_url.set(id + 1);

        let url = format!("blob:headless/{}", id);
        self.object_urls.borrow_mut().insert(url.clone(), blob.clone());
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) {
        self.object_urls.borrow_mut().remove(url);
    }

    fn click_download_link(&self, href: &str, download_name: &str) -> DomResult<()> {
        if !self.document {
            return Err(DomError::DocumentUnavailable);
        }

        self.downloads.borrow_mut().push(DownloadRecord {
            href: href.to_string(),
            file_name: download_name.to_string(),
        });
        Ok(())
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn navigator_platform(&self) -> Option<String> {
        self.navigator_platform.clone()
    }

    fn post_message(&self, target: MessageTarget, message: &Value, target_origin: &str) -> DomResult<()> {
        if target == MessageTarget::Opener && !self.opener {
            return Err(DomError::Messaging("window has no opener".to_string()));
        }

        self.posted.borrow_mut().push(PostedMessage {
            target,
            message: message.clone(),
            target_origin: target_origin.to_string(),
        });
        Ok(())
    }

    fn add_message_listener(&self, listener: MessageListener) -> DomResult<()> {
        self.message_listeners.borrow_mut().push(listener);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_event_listeners() {
        let platform = HeadlessPlatform::new();
        let seen = Rc::new(Cell::new(0));

        let counter = Rc::clone(&seen);
        let listener: EventListener = Rc::new(move |_| counter.set(counter.get() + 1));

        platform.add_event_listener("file_loaded", Rc::clone(&listener));
        platform.add_event_listener("file_loaded", Rc::clone(&listener));
        assert_eq!(platform.listener_count("file_loaded"), 1);

        let event = CustomEvent {
            name: "file_loaded".to_string(),
            detail: json!({}),
        };
        platform.dispatch_event(&event);
        assert_eq!(seen.get(), 1);

        platform.remove_event_listener("file_loaded", &listener);
        platform.dispatch_event(&event);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_performance_marks() {
        let platform = HeadlessPlatform::new();
        platform.performance_mark("start");
        platform.advance_clock(12.5);
        platform.performance_mark("end");

        assert_eq!(platform.performance_measure("start", "end"), Some(12.5));
        assert_eq!(platform.performance_measure("start", "missing"), None);
    }

    #[test]
    fn test_object_urls() {
        let platform = HeadlessPlatform::new();
        let blob = Blob {
            data: b"%PDF".to_vec(),
            mime_type: "application/pdf".to_string(),
        };

        let first = platform.create_object_url(&blob).unwrap();
        let second = platform.create_object_url(&blob).unwrap();
        assert_ne!(first, second);
        assert_eq!(platform.live_object_urls(), 2);

        platform.revoke_object_url(&first);
        assert_eq!(platform.live_object_urls(), 1);
    }

    #[test]
    fn test_post_message_to_missing_opener() {
        let platform = HeadlessPlatform::new();
        let result = platform.post_message(MessageTarget::Opener, &json!("hi"), "*");
        assert!(matches!(result, Err(DomError::Messaging(_))));

        let platform = HeadlessPlatform::new().with_opener();
        assert!(platform.post_message(MessageTarget::Opener, &json!("hi"), "*").is_ok());
        assert_eq!(platform.posted_messages().len(), 1);
    }
}
