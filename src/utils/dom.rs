//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Whether keyboard focus is inside a text input or textarea.
///
/// Viewer shortcuts are ignored while the user is typing.
pub fn text_entry_focused() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .is_some_and(|el| is_text_entry(&el.tag_name()))
}

fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (including the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
/// Used when an unknown route is normalized back to the overview.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_entry_tags() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("TEXTAREA"));
        assert!(is_text_entry("input"));
        assert!(!is_text_entry("IFRAME"));
        assert!(!is_text_entry("BODY"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#/modules/3/topics/14");
        assert_eq!(get_hash(), "#/modules/3/topics/14");

        replace_hash("#/");
        assert_eq!(get_hash(), "#/");
    }

    #[wasm_bindgen_test]
    fn test_nothing_focused_is_not_text_entry() {
        assert!(!text_entry_focused());
    }
}
