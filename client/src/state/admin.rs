//! Admin screen state for the server-side tool store.
//!
//! DESIGN
//! ======
//! The admin page edits a persisted copy of tool metadata over REST. This
//! state caches the last fetched record list and the create-form draft; it is
//! unrelated to the compiled-in catalog that drives routing and dispatch.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use catalog::{Catalog, NewToolRecord, ToolRecord};
use uuid::Uuid;

/// Cached record list and request status for the admin page.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub records: Vec<ToolRecord>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl AdminState {
    /// Replace the cached list, ordered by name.
    pub fn replace_all(&mut self, mut records: Vec<ToolRecord>) {
        sort_records(&mut records);
        self.records = records;
        self.loading = false;
        self.loaded = true;
        self.error = None;
    }

    /// Insert or replace a record by id, keeping name order.
    pub fn upsert(&mut self, record: ToolRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        sort_records(&mut self.records);
    }

    pub fn remove(&mut self, id: Uuid) {
        self.records.retain(|r| r.id != id);
    }

    #[must_use]
    pub fn record(&self, id: Uuid) -> Option<&ToolRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

fn sort_records(records: &mut [ToolRecord]) {
    records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// Create-form draft. Fields mirror `NewToolRecord`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminDraft {
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub url: String,
    pub featured: bool,
    pub is_new: bool,
}

impl Default for AdminDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category_id: Catalog::builtin()
                .categories()
                .first()
                .map(|c| c.id.to_owned())
                .unwrap_or_default(),
            url: String::new(),
            featured: false,
            is_new: true,
        }
    }
}

impl AdminDraft {
    /// Validate the draft and turn it into an insert payload.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the draft is invalid.
    pub fn to_new_record(&self, catalog: &Catalog) -> Result<NewToolRecord, String> {
        let record = NewToolRecord {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category_id: self.category_id.clone(),
            url: self.url.trim().to_owned(),
            featured: self.featured,
            is_new: self.is_new,
        };
        record.validate(catalog).map_err(|e| e.to_string())?;
        Ok(record)
    }
}
