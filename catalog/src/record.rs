//! Admin tool store records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin panel edits a separate, persisted copy of tool metadata stored
//! in a `tools` table. These are the wire types shared by the server's REST
//! API, the admin page, and the CLI. The static [`Catalog`] is only used to
//! validate category references; the registry never reads these records.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Catalog;

/// Validation failure for a record write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("url must be relative (`/...`) or http(s): {0}")]
    InvalidUrl(String),
}

/// A persisted tool row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "new", default)]
    pub is_new: bool,
}

/// Insert payload: a [`ToolRecord`] without its id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewToolRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "new", default)]
    pub is_new: bool,
}

/// Partial update payload. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(rename = "new", default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl NewToolRecord {
    /// Check the record against the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), RecordError> {
        validate_name(&self.name)?;
        validate_category(&self.category_id, catalog)?;
        validate_url(&self.url)
    }

    /// Attach an id, trimming the name.
    #[must_use]
    pub fn into_record(self, id: Uuid) -> ToolRecord {
        ToolRecord {
            id,
            name: self.name.trim().to_owned(),
            description: self.description,
            category_id: self.category_id,
            url: self.url,
            featured: self.featured,
            is_new: self.is_new,
        }
    }
}

impl ToolPatch {
    /// Check the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), RecordError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(category_id) = &self.category_id {
            validate_category(category_id, catalog)?;
        }
        if let Some(url) = &self.url {
            validate_url(url)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply present fields onto `record`.
    pub fn apply(&self, record: &mut ToolRecord) {
        if let Some(name) = &self.name {
            record.name = name.trim().to_owned();
        }
        if let Some(description) = &self.description {
            record.description.clone_from(description);
        }
        if let Some(category_id) = &self.category_id {
            record.category_id.clone_from(category_id);
        }
        if let Some(url) = &self.url {
            record.url.clone_from(url);
        }
        if let Some(featured) = self.featured {
            record.featured = featured;
        }
        if let Some(is_new) = self.is_new {
            record.is_new = is_new;
        }
    }
}

fn validate_name(name: &str) -> Result<(), RecordError> {
    if name.trim().is_empty() {
        return Err(RecordError::EmptyName);
    }
    Ok(())
}

fn validate_category(category_id: &str, catalog: &Catalog) -> Result<(), RecordError> {
    if catalog.category(category_id).is_none() {
        return Err(RecordError::UnknownCategory(category_id.to_owned()));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), RecordError> {
    if url.is_empty() || url.starts_with('/') || url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }
    Err(RecordError::InvalidUrl(url.to_owned()))
}
