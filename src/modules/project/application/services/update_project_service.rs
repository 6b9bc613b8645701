use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{SaveProjectCommand, UpdateProjectError, UpdateProjectUseCase},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct UpdateProjectService {
    store: Arc<dyn DocumentStore>,
}

impl UpdateProjectService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateProjectUseCase for UpdateProjectService {
    async fn execute(
        &self,
        project_id: &str,
        command: SaveProjectCommand,
    ) -> Result<Project, UpdateProjectError> {
        let exists = self
            .store
            .get(collections::PROJECTS, project_id)
            .await
            .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?
            .is_some();

        // `set` would otherwise create a project under a caller-chosen id
        if !exists {
            return Err(UpdateProjectError::ProjectNotFound);
        }

        let data = command.into_data();
        let fields =
            encode(&data).map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?;

        self.store
            .set(collections::PROJECTS, project_id, fields)
            .await
            .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?;

        tracing::info!(project_id, "Project updated");
        Ok(Project {
            id: project_id.to_string(),
            data,
        })
    }
}
