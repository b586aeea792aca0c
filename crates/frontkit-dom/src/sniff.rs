//! # Browser and OS Sniffing
//!
//! Reads the user agent, which any page can spoof. Use the result for
//! analytics and cosmetic tweaks only.
//!
//! ## Browser Checks (first match wins)
//! ```text
//! "Opera" | "OPR"     → Opera
//! "Edg"               → Edge      (before Chrome: Edge says "Chrome" too)
//! "Chrome"            → Chrome    (before Safari: Chrome says "Safari" too)
//! "Safari"            → Safari
//! "Firefox"           → Firefox
//! "MSIE" | "Trident"  → IE
//! otherwise           → unknown
//! ```

use crate::platform::Platform;

const MACOS_PLATFORMS: [&str; 4] = ["Macintosh", "MacIntel", "MacPPC", "Mac68K"];
const WINDOWS_PLATFORMS: [&str; 4] = ["Win32", "Win64", "Windows", "WinCE"];
const IOS_PLATFORMS: [&str; 3] = ["iPhone", "iPad", "iPod"];

/// Browser name for a user agent string.
///
/// ## Example
/// ```rust
/// use frontkit_dom::browser_name_from_user_agent;
///
/// let edge = "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/120.0 Safari/537.36 Edg/120.0";
/// assert_eq!(browser_name_from_user_agent(edge), "Edge");
/// ```
pub fn browser_name_from_user_agent(user_agent: &str) -> &'static str {
    let has = |needle: &str| user_agent.contains(needle);

    if has("Opera") || has("OPR") {
        "Opera"
    } else if has("Edg") {
        "Edge"
    } else if has("Chrome") {
        "Chrome"
    } else if has("Safari") {
        "Safari"
    } else if has("Firefox") {
        "Firefox"
    } else if has("MSIE") || has("Trident") {
        "IE"
    } else {
        "unknown"
    }
}

/// OS name from `navigator.platform`, falling back to the user agent for
/// Android. Empty when nothing matches.
pub fn os_name_from(user_agent: &str, platform: &str) -> &'static str {
    if MACOS_PLATFORMS.contains(&platform) {
        "Mac OS"
    } else if IOS_PLATFORMS.contains(&platform) {
        "iOS"
    } else if WINDOWS_PLATFORMS.contains(&platform) {
        "Windows"
    } else if user_agent.to_ascii_lowercase().contains("android") {
        "Android"
    } else if platform.contains("Linux") {
        "Linux"
    } else {
        ""
    }
}

/// Browser name of the running page, empty without a window or navigator.
pub fn get_browser_name(platform: &dyn Platform) -> &'static str {
    if !platform.has_window() {
        return "";
    }

    platform
        .user_agent()
        .map_or("", |user_agent| browser_name_from_user_agent(&user_agent))
}

/// OS name of the running page, empty without a window or navigator.
pub fn get_os_name(platform: &dyn Platform) -> &'static str {
    if !platform.has_window() {
        return "";
    }

    match (platform.user_agent(), platform.navigator_platform()) {
        (Some(user_agent), Some(nav_platform)) => os_name_from(&user_agent, &nav_platform),
        _ => "",
    }
}
