use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPostError {
    #[error("Blog post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Result<BlogPost, GetPostError>;
}
