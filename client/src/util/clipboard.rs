//! Clipboard helper for widget "Copy" buttons.

/// Copy `text` to the system clipboard.
///
/// Returns `false` when there is nothing to copy or no browser clipboard is
/// available (SSR, tests, insecure contexts).
pub fn copy_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
