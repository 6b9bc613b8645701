use std::sync::Arc;

use async_trait::async_trait;

use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct DeleteMessageService {
    store: Arc<dyn DocumentStore>,
}

impl DeleteMessageService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteMessageUseCase for DeleteMessageService {
    async fn execute(&self, message_id: &str) -> Result<(), DeleteMessageError> {
        let removed = self
            .store
            .delete(collections::MESSAGES, message_id)
            .await
            .map_err(|e| DeleteMessageError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(DeleteMessageError::MessageNotFound);
        }

        tracing::info!(message_id, "Contact message deleted");
        Ok(())
    }
}
