use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    /// Projects in creation order.
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError>;
}
