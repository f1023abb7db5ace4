//! Admin tool store: the persisted `tools` table behind `/api/tools`.
//!
//! DESIGN
//! ======
//! Handlers talk to a [`ToolStore`] trait object so the same routes serve a
//! Postgres table in production and an in-memory list when no database is
//! configured (local runs, tests). Field validation against the static
//! catalog happens in [`validated_insert`] and [`validated_update`], before
//! either backend sees the write.
//!
//! ERROR HANDLING
//! ==============
//! [`ToolStoreError`] separates caller mistakes (`NotFound`, `Invalid`) from
//! backend failures (`Database`) so routes can map them to 404/422/500.

#[cfg(test)]
#[path = "tool_store_test.rs"]
mod tool_store_test;

use catalog::{Catalog, NewToolRecord, RecordError, ToolPatch, ToolRecord};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ToolStoreError {
    #[error("tool not found: {0}")]
    NotFound(Uuid),
    #[error("invalid tool: {0}")]
    Invalid(#[from] RecordError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD over tool records. Listing order is case-insensitive by name.
#[async_trait::async_trait]
pub trait ToolStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ToolRecord>, ToolStoreError>;

    async fn insert(&self, record: NewToolRecord) -> Result<ToolRecord, ToolStoreError>;

    /// Apply `patch` to the record with `id` and return the updated row.
    async fn update(&self, id: Uuid, patch: ToolPatch) -> Result<ToolRecord, ToolStoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), ToolStoreError>;
}

/// Validate `record` against `catalog`, then insert it.
///
/// # Errors
///
/// Returns [`ToolStoreError::Invalid`] for bad fields, otherwise whatever the
/// store returns.
pub async fn validated_insert(
    store: &dyn ToolStore,
    catalog: &Catalog,
    record: NewToolRecord,
) -> Result<ToolRecord, ToolStoreError> {
    record.validate(catalog)?;
    store.insert(record).await
}

/// Validate `patch` against `catalog`, then apply it.
///
/// # Errors
///
/// Returns [`ToolStoreError::Invalid`] for bad fields, otherwise whatever the
/// store returns.
pub async fn validated_update(
    store: &dyn ToolStore,
    catalog: &Catalog,
    id: Uuid,
    patch: ToolPatch,
) -> Result<ToolRecord, ToolStoreError> {
    patch.validate(catalog)?;
    store.update(id, patch).await
}

fn sort_by_name(records: &mut [ToolRecord]) {
    records.sort_by_cached_key(|record| record.name.to_lowercase());
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct MemoryToolStore {
    records: RwLock<Vec<ToolRecord>>,
}

impl MemoryToolStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_records(records: Vec<ToolRecord>) -> Self {
        Self { records: RwLock::new(records) }
    }
}

#[async_trait::async_trait]
impl ToolStore for MemoryToolStore {
    async fn list(&self) -> Result<Vec<ToolRecord>, ToolStoreError> {
        let mut records = self.records.read().await.clone();
        sort_by_name(&mut records);
        Ok(records)
    }

    async fn insert(&self, record: NewToolRecord) -> Result<ToolRecord, ToolStoreError> {
        let record = record.into_record(Uuid::new_v4());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: ToolPatch) -> Result<ToolRecord, ToolStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ToolStoreError::NotFound(id))?;
        patch.apply(record);
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ToolStoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(ToolStoreError::NotFound(id));
        }
        Ok(())
    }
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

type ToolRow = (Uuid, String, String, String, String, bool, bool);

const SELECT_COLUMNS: &str = r#"id, name, description, category_id, url, featured, "new""#;

fn from_row(row: ToolRow) -> ToolRecord {
    let (id, name, description, category_id, url, featured, is_new) = row;
    ToolRecord { id, name, description, category_id, url, featured, is_new }
}

/// Store backed by the `tools` table.
pub struct PgToolStore {
    pool: PgPool,
}

impl PgToolStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ToolStore for PgToolStore {
    async fn list(&self) -> Result<Vec<ToolRecord>, ToolStoreError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM tools ORDER BY lower(name), id");
        let rows = sqlx::query_as::<_, ToolRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn insert(&self, record: NewToolRecord) -> Result<ToolRecord, ToolStoreError> {
        let record = record.into_record(Uuid::new_v4());
        sqlx::query(
            r#"INSERT INTO tools (id, name, description, category_id, url, featured, "new")
               VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.category_id)
        .bind(&record.url)
        .bind(record.featured)
        .bind(record.is_new)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: ToolPatch) -> Result<ToolRecord, ToolStoreError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM tools WHERE id = $1 FOR UPDATE");
        let mut record = sqlx::query_as::<_, ToolRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .map(from_row)
            .ok_or(ToolStoreError::NotFound(id))?;

        if !patch.is_empty() {
            patch.apply(&mut record);
            sqlx::query(
                r#"UPDATE tools
                   SET name = $2, description = $3, category_id = $4, url = $5,
                       featured = $6, "new" = $7, updated_at = now()
                   WHERE id = $1"#,
            )
            .bind(record.id)
            .bind(&record.name)
            .bind(&record.description)
            .bind(&record.category_id)
            .bind(&record.url)
            .bind(record.featured)
            .bind(record.is_new)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ToolStoreError> {
        let result = sqlx::query("DELETE FROM tools WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ToolStoreError::NotFound(id));
        }
        Ok(())
    }
}
