use async_trait::async_trait;

use crate::message::application::domain::entities::Message;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    /// Newest first.
    async fn execute(&self) -> Result<Vec<Message>, ListMessagesError>;
}
