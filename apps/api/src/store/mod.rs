//! Record Store: owns persisted résumé records.
//!
//! The `ResumeStore` trait is the collaborator contract the rest of the
//! service depends on; `PgResumeStore` is the production implementation.
//! Create and update are single-statement operations, so partial writes
//! cannot occur at this boundary.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};

pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-constraint violation. No unique index exists on résumés today;
    /// the variant is part of the shared store contract and fires for any
    /// unique index the schema grows.
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Persists a complete record atomically, assigning identifier and
    /// creation timestamp.
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError>;

    /// `None` signals an unknown identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError>;

    /// All records; ordering is store-defined.
    async fn find_all(&self) -> Result<Vec<ResumeRecord>, StoreError>;

    /// Overwrites only the fields supplied in `update`; nested sequences are
    /// replaced wholesale. `None` on unknown identifier.
    async fn replace(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, StoreError>;

    /// Terminal removal. `false` when no row existed for `id`.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}
