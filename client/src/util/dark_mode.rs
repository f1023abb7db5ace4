//! Theme preference: read, apply, and toggle.
//!
//! The preference lives in `localStorage` under [`STORAGE_KEY`] and is
//! reflected as a `data-theme` attribute on `<html>`. When nothing is stored
//! the system `prefers-color-scheme` decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test builds
//! no-op so server rendering stays deterministic (always light).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "toolbox_theme";

/// Colour theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    /// Value written to the `data-theme` attribute and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values yield `None` so the system
    /// preference can take over.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" | "false" => Some(Self::Light),
            "dark" | "true" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Label for the theme toggle button: the icon of the theme it switches to.
pub fn toggle_icon(enabled: bool) -> &'static str {
    if enabled { "☀" } else { "☾" }
}

/// Read the stored preference, falling back to the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw));
        if let Some(theme) = stored {
            return theme == Theme::Dark;
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", Theme::from_dark(enabled).as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, Theme::from_dark(next).as_str());
        }
    }
    next
}
