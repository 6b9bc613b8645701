use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{CreateProjectError, CreateProjectUseCase, SaveProjectCommand},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct CreateProjectService {
    store: Arc<dyn DocumentStore>,
}

impl CreateProjectService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CreateProjectUseCase for CreateProjectService {
    async fn execute(&self, command: SaveProjectCommand) -> Result<Project, CreateProjectError> {
        let data = command.into_data();
        let fields =
            encode(&data).map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        let document = self
            .store
            .add(collections::PROJECTS, fields)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        tracing::info!(project_id = %document.id, title = %data.title, "Project created");
        Ok(Project {
            id: document.id,
            data,
        })
    }
}
