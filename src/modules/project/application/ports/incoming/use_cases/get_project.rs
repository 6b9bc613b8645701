use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<Project, GetProjectError>;
}
