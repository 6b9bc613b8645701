use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct DeleteProjectService {
    store: Arc<dyn DocumentStore>,
}

impl DeleteProjectService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteProjectUseCase for DeleteProjectService {
    async fn execute(&self, project_id: &str) -> Result<(), DeleteProjectError> {
        let removed = self
            .store
            .delete(collections::PROJECTS, project_id)
            .await
            .map_err(|e| DeleteProjectError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(DeleteProjectError::ProjectNotFound);
        }

        tracing::info!(project_id, "Project deleted");
        Ok(())
    }
}
