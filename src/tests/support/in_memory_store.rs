use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::store::application::{
    domain::entities::{Document, DocumentQuery, SortDirection},
    ports::outgoing::{validate_field_name, DocumentStore, StoreError},
};

/// `DocumentStore` kept in a vector, in insertion order.
///
/// Ordering follows PostgreSQL's text ordering of `data ->> field`, with
/// missing values sorting last ascending and first descending.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: Mutex<Vec<Document>>,
    writes: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document without counting it as a write.
    pub fn with_document(self, collection: &str, id: &str, data: Value) -> Self {
        {
            let mut documents = self.documents.lock().unwrap();
            let created_at = Utc::now() + Duration::milliseconds(documents.len() as i64);
            documents.push(Document {
                id: id.to_string(),
                collection: collection.to_string(),
                data,
                created_at,
                updated_at: created_at,
            });
        }
        self
    }

    /// Number of `set`, `add` and `delete` calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(AtomicOrdering::SeqCst)
    }

    pub fn snapshot(&self, collection: &str, id: &str) -> Option<Value> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.collection == collection && d.id == id)
            .map(|d| d.data.clone())
    }

    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection)
            .map(|d| d.id.clone())
            .collect()
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, AtomicOrdering::SeqCst);
    }
}

fn field_text(data: &Value, field: &str) -> Option<String> {
    match data.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn compare_field(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.collection == collection && d.id == id)
            .cloned())
    }

    async fn list(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError> {
        if let Some(order) = &query.order_by {
            validate_field_name(&order.field)?;
        }

        let mut documents: Vec<Document> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection)
            .cloned()
            .collect();

        if let Some(order) = &query.order_by {
            documents.sort_by(|a, b| {
                let ordering = compare_field(
                    &field_text(&a.data, &order.field),
                    &field_text(&b.data, &order.field),
                );
                match order.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            documents.truncate(limit as usize);
        }

        Ok(documents)
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError> {
        self.record_write();
        let mut documents = self.documents.lock().unwrap();
        let now = Utc::now();

        match documents
            .iter_mut()
            .find(|d| d.collection == collection && d.id == id)
        {
            Some(existing) => {
                existing.data = data;
                existing.updated_at = now;
            }
            None => documents.push(Document {
                id: id.to_string(),
                collection: collection.to_string(),
                data,
                created_at: now,
                updated_at: now,
            }),
        }
        Ok(())
    }

    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        self.record_write();
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4().simple().to_string(),
            collection: collection.to_string(),
            data,
            created_at: now,
            updated_at: now,
        };
        self.documents.lock().unwrap().push(document.clone());
        Ok(document)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        self.record_write();
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| !(d.collection == collection && d.id == id));
        Ok(documents.len() < before)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingDocumentStore;

fn unreachable_db() -> StoreError {
    StoreError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(unreachable_db())
    }

    async fn list(
        &self,
        _collection: &str,
        _query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError> {
        Err(unreachable_db())
    }

    async fn set(&self, _collection: &str, _id: &str, _data: Value) -> Result<(), StoreError> {
        Err(unreachable_db())
    }

    async fn add(&self, _collection: &str, _data: Value) -> Result<Document, StoreError> {
        Err(unreachable_db())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<bool, StoreError> {
        Err(unreachable_db())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn orders_descending_with_missing_values_first() {
        let store = InMemoryDocumentStore::new()
            .with_document("blogs", "a", json!({ "publishedAt": "2024-01-01T00:00:00Z" }))
            .with_document("blogs", "b", json!({}))
            .with_document("blogs", "c", json!({ "publishedAt": "2024-06-01T00:00:00Z" }));

        let docs = store
            .list(
                "blogs",
                DocumentQuery::all().order_by("publishedAt", SortDirection::Desc),
            )
            .await
            .unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn seeding_is_not_a_write() {
        let store = InMemoryDocumentStore::new().with_document("skills", "x", json!({}));
        assert_eq!(store.writes(), 0);

        assert!(store.delete("skills", "x").await.unwrap());
        assert_eq!(store.writes(), 1);
    }
}
