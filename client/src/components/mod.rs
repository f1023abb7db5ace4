//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome, catalog cards, and the dispatcher's
//! fallback view while reading shared state from Leptos context providers.

pub mod category_card;
pub mod footer;
pub mod header;
pub mod not_implemented;
pub mod search_box;
pub mod toast_host;
pub mod tool_card;
