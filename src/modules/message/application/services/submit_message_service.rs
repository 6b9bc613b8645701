use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};

use crate::message::application::{
    domain::entities::{Message, MessageData},
    ports::incoming::use_cases::{SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct SubmitMessageService {
    store: Arc<dyn DocumentStore>,
}

impl SubmitMessageService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmitMessageUseCase for SubmitMessageService {
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError> {
        let data = MessageData {
            name: command.name,
            email: command.email,
            subject: command.subject,
            message: command.message,
            created_at: Utc::now().trunc_subsecs(0),
        };
        let fields =
            encode(&data).map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        let document = self
            .store
            .add(collections::MESSAGES, fields)
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        tracing::info!(message_id = %document.id, "Contact message received");
        Ok(Message {
            id: document.id,
            data,
        })
    }
}
