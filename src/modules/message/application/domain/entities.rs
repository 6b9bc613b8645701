use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::application::{domain::entities::Document, ports::outgoing::StoreError};

/// Fields of a `messages/{id}` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Message {
    pub id: String,
    #[serde(flatten)]
    pub data: MessageData,
}

impl TryFrom<&Document> for Message {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id.clone(),
            data: doc.decode()?,
        })
    }
}
