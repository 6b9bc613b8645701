use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{ListProjectsError, ListProjectsUseCase},
};
use crate::store::application::{
    domain::entities::{collections, DocumentQuery},
    ports::outgoing::DocumentStore,
};

pub struct ListProjectsService {
    store: Arc<dyn DocumentStore>,
}

impl ListProjectsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListProjectsUseCase for ListProjectsService {
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
        self.store
            .list(collections::PROJECTS, DocumentQuery::all())
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))?
            .iter()
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))
    }
}
