use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePostError {
    #[error("Blog post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Result<(), DeletePostError>;
}
