use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{GetProjectError, GetProjectUseCase},
};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct GetProjectService {
    store: Arc<dyn DocumentStore>,
}

impl GetProjectService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetProjectUseCase for GetProjectService {
    async fn execute(&self, project_id: &str) -> Result<Project, GetProjectError> {
        let document = self
            .store
            .get(collections::PROJECTS, project_id)
            .await
            .map_err(|e| GetProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetProjectError::ProjectNotFound)?;

        Project::try_from(&document).map_err(|e| GetProjectError::RepositoryError(e.to_string()))
    }
}
