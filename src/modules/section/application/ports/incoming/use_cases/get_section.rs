use async_trait::async_trait;

use crate::section::application::domain::entities::SectionDocument;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSectionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSectionUseCase<S: SectionDocument>: Send + Sync {
    /// `None` when the section has never been saved.
    async fn execute(&self) -> Result<Option<S>, GetSectionError>;
}
