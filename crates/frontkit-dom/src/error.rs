//! # DOM Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Platform call fails ──► DomError                                       │
//! │                             │                                           │
//! │            ┌────────────────┴──────────────────┐                        │
//! │            ▼                                   ▼                        │
//! │  events / scroll / clipboard /        post_message_to_window /          │
//! │  download / performance               listen_to_window_messages         │
//! │  logged, swallowed                    logged, returned to the caller    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing window during messaging is a caller mistake, not a formatting
//! edge case, so those two helpers hand the error back.

use thiserror::Error;

/// Failures reported by a [`Platform`](crate::Platform).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    /// No `window` (server-side rendering, workers).
    #[error("window is undefined")]
    WindowUnavailable,

    #[error("document is undefined")]
    DocumentUnavailable,

    /// The clipboard refused the write.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// A download could not be started.
    ///
    /// ## When This Occurs
    /// ```text
    /// DownloadMethod::Blob without a file   → "file/blob is null"
    /// DownloadMethod::Url without a URL     → "fileUrl is empty"
    /// ```
    #[error("File download failed: {0}")]
    Download(String),

    /// Smooth scrolling is not supported.
    #[error("Scroll failed: {0}")]
    Scroll(String),

    /// Posting or subscribing to window messages failed.
    #[error("Window messaging failed: {0}")]
    Messaging(String),
}

/// Convenience type alias for Results with DomError.
pub type DomResult<T> = Result<T, DomError>;
