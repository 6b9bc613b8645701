use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::store::application::domain::entities::{Document, DocumentQuery};

static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid field name regex"));

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid field name: {0}")]
    InvalidField(String),

    #[error("Malformed document {collection}/{id}: {reason}")]
    MalformedDocument {
        collection: String,
        id: String,
        reason: String,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Only top-level document fields can be used for ordering.
pub fn validate_field_name(field: &str) -> Result<(), StoreError> {
    if FIELD_NAME.is_match(field) {
        Ok(())
    } else {
        Err(StoreError::InvalidField(field.to_string()))
    }
}

/// Named collections of schema-less documents.
///
/// `set` always replaces the whole document; there is no partial update.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    async fn list(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError>;

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Store under a freshly generated id.
    async fn add(&self, collection: &str, data: serde_json::Value)
        -> Result<Document, StoreError>;

    /// Returns `false` when nothing was stored under `id`.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;
}
