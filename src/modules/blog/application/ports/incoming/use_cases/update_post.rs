use async_trait::async_trait;

use super::PublishPostCommand;
use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Blog post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    /// Overwrites the post, keeping its original `publishedAt`.
    async fn execute(
        &self,
        post_id: &str,
        command: PublishPostCommand,
    ) -> Result<BlogPost, UpdatePostError>;
}
