use std::sync::Arc;

use async_trait::async_trait;

use crate::message::application::{
    domain::entities::Message,
    ports::incoming::use_cases::{ListMessagesError, ListMessagesUseCase},
};
use crate::store::application::{
    domain::entities::{collections, DocumentQuery, SortDirection},
    ports::outgoing::DocumentStore,
};

pub struct ListMessagesService {
    store: Arc<dyn DocumentStore>,
}

impl ListMessagesService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListMessagesUseCase for ListMessagesService {
    async fn execute(&self) -> Result<Vec<Message>, ListMessagesError> {
        let query = DocumentQuery::all().order_by("createdAt", SortDirection::Desc);

        self.store
            .list(collections::MESSAGES, query)
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))?
            .iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))
    }
}
