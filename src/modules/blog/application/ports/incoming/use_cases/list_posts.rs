use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    /// Newest first by `publishedAt`; drafts sort ahead of dated posts.
    async fn execute(&self) -> Result<Vec<BlogPost>, ListPostsError>;
}
