// =============================================================================
// GS-IT Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Format Utilities
// =============================================================================

use web_sys::{ScrollBehavior, ScrollToOptions, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object, if running in a browser.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset in pixels (0 outside a browser).
pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the viewport back to the top.
pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

/// Render a stat like `500` with its suffix, e.g. `"500+"` or `"24/7"`.
pub fn format_stat(value: u32, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

/// Initials for avatar placeholders ("Ahmed Al Mansoori" -> "AA").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphabetic())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(500, "+"), "500+");
        assert_eq!(format_stat(24, "/7"), "24/7");
        assert_eq!(format_stat(98, "%"), "98%");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ahmed Al Mansoori"), "AA");
        assert_eq!(initials("sarah"), "S");
        assert_eq!(initials("  "), "");
    }
}
