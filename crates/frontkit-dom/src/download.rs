//! # File Download
//!
//! Saves a file on the user's machine through a temporary download link.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DownloadMethod::Blob                  DownloadMethod::Url              │
//! │  ────────────────────                  ───────────────────              │
//! │  file bytes + mime type                file_url                         │
//! │        │                                    │                           │
//! │        ▼                                    │                           │
//! │  create_object_url ──► blob:...             │                           │
//! │        │                                    │                           │
//! │        └──────────────┬─────────────────────┘                           │
//! │                       ▼                                                 │
//! │  click <a href=url download="name.ext">, then revoke the URL            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{DomError, DomResult};
use crate::platform::{Blob, Platform};

/// Where the file comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMethod {
    /// Bytes held by the page.
    Blob,
    /// A URL the browser fetches.
    #[default]
    Url,
}

/// What to download and what to call it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadConfig {
    /// File contents, used with [`DownloadMethod::Blob`].
    #[serde(default)]
    pub file: Option<Vec<u8>>,

    /// MIME type given to the blob, e.g. `application/pdf`.
    #[serde(default, rename = "type")]
    pub mime_type: String,

    /// Name without extension.
    pub file_name: String,

    #[serde(default)]
    pub download_method: DownloadMethod,

    /// Extension without the dot.
    pub file_extension: String,

    /// Used with [`DownloadMethod::Url`].
    #[serde(default)]
    pub file_url: Option<String>,
}

impl DownloadConfig {
    /// `name.ext`
    pub fn download_name(&self) -> String {
        format!("{}.{}", self.file_name, self.file_extension)
    }
}

/// Starts a download. Failures are logged, never returned.
///
/// ## Example
/// ```rust
/// use frontkit_dom::{download_file, DownloadConfig, DownloadMethod, HeadlessPlatform};
///
/// let platform = HeadlessPlatform::new();
/// download_file(&platform, &DownloadConfig {
///     file: Some(b"%PDF-1.7".to_vec()),
///     mime_type: "application/pdf".to_string(),
///     file_name: "MyFile".to_string(),
///     download_method: DownloadMethod::Blob,
///     file_extension: "pdf".to_string(),
///     file_url: None,
/// });
///
/// assert_eq!(platform.downloads()[0].file_name, "MyFile.pdf");
/// ```
pub fn download_file(platform: &dyn Platform, config: &DownloadConfig) {
    if let Err(err) = try_download_file(platform, config) {
        error!(file = %config.download_name(), error = %err, "File download failed");
    }
}

fn try_download_file(platform: &dyn Platform, config: &DownloadConfig) -> DomResult<()> {
    if !platform.has_window() {
        return Err(DomError::WindowUnavailable);
    }

    let url = match config.download_method {
        DownloadMethod::Blob => {
            let data = config
                .file
                .as_ref()
                .ok_or_else(|| DomError::Download("file/blob is null".to_string()))?;

            let blob = Blob {
                data: data.clone(),
                mime_type: config.mime_type.clone(),
            };
            platform.create_object_url(&blob)?
        }
        DownloadMethod::Url => config
            .file_url
            .clone()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DomError::Download("fileUrl is empty".to_string()))?,
    };

    let clicked = platform.click_download_link(&url, &config.download_name());
    platform.revoke_object_url(&url);
    clicked?;

    debug!(file = %config.download_name(), method = ?config.download_method, "File download started");
    Ok(())
}
