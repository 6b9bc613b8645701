use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, NullOrdering, OnConflict},
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::store::application::domain::entities::{Document, DocumentQuery, SortDirection};
use crate::store::application::ports::outgoing::{validate_field_name, DocumentStore, StoreError};

use super::sea_orm_entity::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
    Model as DocumentModel,
};

/// `DocumentStore` over a single `documents` table keyed by `(collection, id)`
/// with the fields kept in a JSONB column.
#[derive(Debug, Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> StoreError {
    StoreError::DatabaseError(e.to_string())
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let model: Option<DocumentModel> =
            DocumentEntity::find_by_id((collection.to_string(), id.to_string()))
                .one(&*self.db)
                .await
                .map_err(db_error)?;

        Ok(model.map(|m| m.to_document()))
    }

    async fn list(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError> {
        let mut select = DocumentEntity::find().filter(DocumentColumn::Collection.eq(collection));

        if let Some(order) = &query.order_by {
            validate_field_name(&order.field)?;
            // Documents without the field stay listed: last ascending, first descending
            let (direction, nulls) = match order.direction {
                SortDirection::Asc => (Order::Asc, NullOrdering::Last),
                SortDirection::Desc => (Order::Desc, NullOrdering::First),
            };
            select = select.order_by_with_nulls(
                Expr::cust_with_values("data ->> ?", [order.field.clone()]),
                direction,
                nulls,
            );
        }

        // Creation order, then id, keeps listings stable
        select = select
            .order_by_asc(DocumentColumn::CreatedAt)
            .order_by_asc(DocumentColumn::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let models: Vec<DocumentModel> = select.all(&*self.db).await.map_err(db_error)?;

        Ok(models.iter().map(DocumentModel::to_document).collect())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<(), StoreError> {
        let now = Utc::now().fixed_offset();
        let active = DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(data),
            created_at: Set(now),
            updated_at: Set(now),
        };

        DocumentEntity::insert(active)
            .on_conflict(
                OnConflict::columns([DocumentColumn::Collection, DocumentColumn::Id])
                    .update_columns([DocumentColumn::Data, DocumentColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_error)?;

        tracing::debug!(collection, id, "Document written");
        Ok(())
    }

    async fn add(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<Document, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let now = Utc::now();
        let active = DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.clone()),
            data: Set(data.clone()),
            created_at: Set(now.fixed_offset()),
            updated_at: Set(now.fixed_offset()),
        };

        DocumentEntity::insert(active)
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_error)?;

        tracing::debug!(collection, id = %id, "Document added");
        Ok(Document {
            id,
            collection: collection.to_string(),
            data,
            created_at: now,
            updated_at: now,
        })
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let result = DocumentEntity::delete_by_id((collection.to_string(), id.to_string()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
    use serde_json::json;

    fn document_model(collection: &str, id: &str, data: serde_json::Value) -> DocumentModel {
        let now = Utc::now().fixed_offset();
        DocumentModel {
            collection: collection.to_string(),
            id: id.to_string(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    fn exec_ok(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_get_existing_document() {
        let model = document_model("portfolio", "hero", json!({ "name": "Ada" }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let doc = store.get("portfolio", "hero").await.unwrap().unwrap();

        assert_eq!(doc.id, "hero");
        assert_eq!(doc.collection, "portfolio");
        assert_eq!(doc.data["name"], "Ada");
    }

    #[tokio::test]
    async fn test_get_missing_document_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<DocumentModel>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));

        assert!(store.get("blogs", "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_documents_in_database_order() {
        let first = document_model("skills", "a", json!({ "name": "Rust" }));
        let second = document_model("skills", "b", json!({ "name": "SQL" }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first, second]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let docs = store.list("skills", DocumentQuery::all()).await.unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[1].id, "b");
    }

    #[tokio::test]
    async fn test_list_orders_by_json_field() {
        let newer = document_model("blogs", "n", json!({ "publishedAt": "2024-05-01T00:00:00Z" }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let query = DocumentQuery::all()
            .order_by("publishedAt", SortDirection::Desc)
            .limit(10);

        let docs = store.list("blogs", query).await.unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_list_descending_keeps_documents_missing_the_field_first() {
        let draft = document_model("blogs", "draft", json!({ "title": "Unpublished" }));
        let published = document_model(
            "blogs",
            "live",
            json!({ "publishedAt": "2024-05-01T00:00:00Z" }),
        );

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![draft, published]])
                .into_connection(),
        );
        let store = DocumentStorePostgres::new(Arc::clone(&db));

        let docs = store
            .list(
                "blogs",
                DocumentQuery::all().order_by("publishedAt", SortDirection::Desc),
            )
            .await
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "draft");

        drop(store);
        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("DESC NULLS FIRST"), "{log}");
    }

    #[tokio::test]
    async fn test_list_ascending_puts_documents_missing_the_field_last() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<DocumentModel>::new()])
                .into_connection(),
        );
        let store = DocumentStorePostgres::new(Arc::clone(&db));

        store
            .list(
                "skills",
                DocumentQuery::all().order_by("name", SortDirection::Asc),
            )
            .await
            .unwrap();

        drop(store);
        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("ASC NULLS LAST"), "{log}");
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_order_field_before_querying() {
        // No query results appended: reaching the database would fail differently
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = DocumentStorePostgres::new(Arc::new(db));

        let query = DocumentQuery::all().order_by("a'; --", SortDirection::Asc);
        let result = store.list("blogs", query).await;

        assert!(matches!(result, Err(StoreError::InvalidField(_))));
    }

    #[tokio::test]
    async fn test_set_upserts_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(1)])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store
            .set("portfolio", "about", json!({ "description": "Hi" }))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_set_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store.set("portfolio", "about", json!({})).await;

        assert!(matches!(result, Err(StoreError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_add_generates_id_and_returns_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(1)])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let doc = store
            .add("skills", json!({ "name": "Rust", "icon": "fab fa-rust" }))
            .await
            .unwrap();

        assert_eq!(doc.collection, "skills");
        assert_eq!(doc.id.len(), 32);
        assert_eq!(doc.data["name"], "Rust");
    }

    #[tokio::test]
    async fn test_delete_existing_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(1)])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        assert!(store.delete("skills", "a").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_document() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(0)])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        assert!(!store.delete("skills", "missing").await.unwrap());
    }

    #[test]
    fn test_store_is_cloneable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = DocumentStorePostgres::new(Arc::new(db));

        let _ = store.clone();
    }
}
