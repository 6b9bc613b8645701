use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::store::application::ports::outgoing::StoreError;

/// Collection names shared by every content module.
pub mod collections {
    /// Holds one document per page section (`hero`, `about`, `experience`, ...).
    pub const PORTFOLIO: &str = "portfolio";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const BLOGS: &str = "blogs";
    pub const MESSAGES: &str = "messages";
}

/// A schema-less document as persisted in a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub collection: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Interpret the stored fields as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.data.clone()).map_err(|e| StoreError::MalformedDocument {
            collection: self.collection.clone(),
            id: self.id.clone(),
            reason: e.to_string(),
        })
    }
}

/// Serialize a typed value into document fields.
pub fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::Encoding(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

/// Listing options. Without `order_by` documents come back in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub order_by: Option<OrderBy>,
    pub limit: Option<u64>,
}

impl DocumentQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Sample {
        title: String,
    }

    fn doc(data: serde_json::Value) -> Document {
        Document {
            id: "abc".to_string(),
            collection: "samples".to_string(),
            data,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn decode_reads_typed_fields() {
        let sample: Sample = doc(json!({ "title": "Hello" })).decode().unwrap();
        assert_eq!(sample.title, "Hello");
    }

    #[test]
    fn decode_reports_collection_and_id_on_mismatch() {
        let result: Result<Sample, _> = doc(json!({ "title": 42 })).decode();

        match result {
            Err(StoreError::MalformedDocument { collection, id, .. }) => {
                assert_eq!(collection, "samples");
                assert_eq!(id, "abc");
            }
            other => panic!("Expected MalformedDocument, got {:?}", other),
        }
    }

    #[test]
    fn query_builder_sets_order_and_limit() {
        let query = DocumentQuery::all()
            .order_by("publishedAt", SortDirection::Desc)
            .limit(6);

        assert_eq!(query.limit, Some(6));
        let order = query.order_by.unwrap();
        assert_eq!(order.field, "publishedAt");
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn encode_produces_object() {
        let value = encode(&Sample {
            title: "x".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({ "title": "x" }));
    }
}
