use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

/// Projects read when looking for related ones.
pub const RELATED_CANDIDATES: u64 = 6;

/// Projects shown under "Related Projects".
pub const RELATED_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RelatedProjectsError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RelatedProjectsUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<Vec<Project>, RelatedProjectsError>;
}
