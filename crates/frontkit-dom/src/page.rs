//! # Page Helpers
//!
//! Scrolling, clipboard writes and performance marks.

use tracing::{error, warn};

use crate::platform::Platform;

// =============================================================================
// Scrolling
// =============================================================================

/// Jumps to the top of the page. Does nothing without a window.
pub fn scroll_page_to_top(platform: &dyn Platform) {
    if platform.has_window() {
        platform.scroll_to(0.0, 0.0);
    }
}

/// Scrolls to the top with an animation, or jumps there when smooth
/// scrolling is unsupported.
pub fn smooth_scroll_to_top(platform: &dyn Platform) {
    if !platform.has_window() {
        return;
    }

    if let Err(err) = platform.smooth_scroll_to(0.0) {
        warn!(error = %err, "Smooth scroll failed, jumping to top");
        platform.scroll_to(0.0, 0.0);
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Copies `text` to the clipboard. Returns false (and logs) on failure.
pub fn copy_to_clipboard(platform: &dyn Platform, text: &str) -> bool {
    match platform.write_clipboard(text) {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "Unable to copy to clipboard");
            false
        }
    }
}

// =============================================================================
// Performance
// =============================================================================

/// Adds a named timestamp to the performance timeline, when there is one.
///
/// ## Example
/// ```rust
/// use frontkit_dom::{performance_mark, performance_measure, HeadlessPlatform};
///
/// let platform = HeadlessPlatform::new();
/// performance_mark(&platform, "ComponentWillMount");
/// platform.advance_clock(40.0);
/// performance_mark(&platform, "ComponentMounted");
///
/// assert_eq!(performance_measure(&platform, "ComponentWillMount", "ComponentMounted"), Some(40.0));
/// ```
pub fn performance_mark(platform: &dyn Platform, name: &str) {
    if platform.has_window() && platform.has_performance() {
        platform.performance_mark(name);
    }
}

/// Milliseconds between two marks made with [`performance_mark`].
pub fn performance_measure(platform: &dyn Platform, mark_start: &str, mark_end: &str) -> Option<f64> {
    if !platform.has_window() || !platform.has_performance() {
        return None;
    }

    let duration = platform.performance_measure(mark_start, mark_end);
    if duration.is_none() {
        warn!(mark_start, mark_end, "Performance mark not found");
    }
    duration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomError;
    use crate::platform::MockPlatform;
    use crate::HeadlessPlatform;

    #[test]
    fn test_scroll_page_to_top() {
        let platform = HeadlessPlatform::new();
        platform.set_scroll_position(10.0, 900.0);
        scroll_page_to_top(&platform);
        assert_eq!(platform.scroll_position(), (0.0, 0.0));

        let mut mock = MockPlatform::new();
        mock.expect_has_window().return_const(false);
        mock.expect_scroll_to().never();
        scroll_page_to_top(&mock);
    }

    #[test]
    fn test_smooth_scroll_falls_back_to_jump() {
        let mut mock = MockPlatform::new();
        mock.expect_has_window().return_const(true);
        mock.expect_smooth_scroll_to()
            .times(1)
            .returning(|_| Err(DomError::Scroll("unsupported".to_string())));
        mock.expect_scroll_to()
            .withf(|x, y| *x == 0.0 && *y == 0.0)
            .times(1)
            .return_const(());

        smooth_scroll_to_top(&mock);
    }

    #[test]
    fn test_smooth_scroll() {
        let platform = HeadlessPlatform::new();
        platform.set_scroll_position(5.0, 300.0);
        smooth_scroll_to_top(&platform);
        assert_eq!(platform.scroll_position(), (5.0, 0.0));

        let platform = HeadlessPlatform::new().without_smooth_scroll();
        platform.set_scroll_position(5.0, 300.0);
        smooth_scroll_to_top(&platform);
        assert_eq!(platform.scroll_position(), (0.0, 0.0));
    }

    #[test]
    fn test_copy_to_clipboard() {
        let platform = HeadlessPlatform::new();
        assert!(copy_to_clipboard(&platform, "URN: 2303232923"));
        assert_eq!(platform.clipboard().as_deref(), Some("URN: 2303232923"));

        let platform = HeadlessPlatform::new().without_clipboard();
        assert!(!copy_to_clipboard(&platform, "text"));
        assert_eq!(platform.clipboard(), None);
    }

    #[test]
    fn test_performance_without_timeline() {
        let platform = HeadlessPlatform::new().without_performance();
        performance_mark(&platform, "a");
        performance_mark(&platform, "b");
        assert_eq!(performance_measure(&platform, "a", "b"), None);
    }

    #[test]
    fn test_performance_measure_missing_mark() {
        let platform = HeadlessPlatform::new();
        performance_mark(&platform, "a");
        assert_eq!(performance_measure(&platform, "a", "never"), None);
    }
}
