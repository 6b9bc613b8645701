use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    MessageNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: &str) -> Result<(), DeleteMessageError>;
}
