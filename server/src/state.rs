//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the tool store behind a trait object and the compiled-in catalog
//! used to validate admin writes.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use catalog::Catalog;

use crate::services::tool_store::{MemoryToolStore, ToolStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is `Arc`-wrapped and the catalog is `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ToolStore>,
    pub catalog: Catalog,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self { store, catalog: Catalog::builtin() }
    }

    /// State backed by an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryToolStore::new()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use catalog::{NewToolRecord, ToolRecord};
    use uuid::Uuid;

    /// A valid record in the `text` category.
    #[must_use]
    pub fn sample_record(name: &str) -> ToolRecord {
        NewToolRecord { name: name.into(), category_id: "text".into(), ..NewToolRecord::default() }
            .into_record(Uuid::new_v4())
    }

    /// Create a test `AppState` over an in-memory store seeded with `records`.
    #[must_use]
    pub fn test_app_state(records: Vec<ToolRecord>) -> AppState {
        AppState::new(Arc::new(MemoryToolStore::with_records(records)))
    }
}
