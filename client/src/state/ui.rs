//! Local UI chrome state (theme, search draft, navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of catalog and admin data so
//! rendering controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme, header search, and the mobile navigation drawer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Text typed into the header search box, not yet submitted.
    pub search_draft: String,
    pub nav_open: bool,
}

impl UiState {
    /// Route for submitting the current search draft.
    ///
    /// Returns `/tools` for a blank draft so the full catalog is shown.
    #[must_use]
    pub fn search_href(&self) -> String {
        search_href(&self.search_draft)
    }
}

/// Build the `/tools` route carrying `query` as the `q` parameter.
pub fn search_href(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return "/tools".to_owned();
    }
    format!("/tools?q={}", urlencoding::encode(trimmed))
}
