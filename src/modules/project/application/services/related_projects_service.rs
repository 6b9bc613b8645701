use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{
        RelatedProjectsError, RelatedProjectsUseCase, RELATED_CANDIDATES, RELATED_SHOWN,
    },
};
use crate::store::application::{
    domain::entities::{collections, DocumentQuery},
    ports::outgoing::DocumentStore,
};

pub struct RelatedProjectsService {
    store: Arc<dyn DocumentStore>,
}

impl RelatedProjectsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

fn repo_error(e: impl ToString) -> RelatedProjectsError {
    RelatedProjectsError::RepositoryError(e.to_string())
}

#[async_trait]
impl RelatedProjectsUseCase for RelatedProjectsService {
    async fn execute(&self, project_id: &str) -> Result<Vec<Project>, RelatedProjectsError> {
        let current = self
            .store
            .get(collections::PROJECTS, project_id)
            .await
            .map_err(repo_error)?
            .ok_or(RelatedProjectsError::ProjectNotFound)?;
        let current = Project::try_from(&current).map_err(repo_error)?;

        let candidates = self
            .store
            .list(
                collections::PROJECTS,
                DocumentQuery::all().limit(RELATED_CANDIDATES),
            )
            .await
            .map_err(repo_error)?;

        let mut related = candidates
            .iter()
            .filter(|doc| doc.id != project_id)
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(repo_error)?;

        // Stable: ties keep creation order
        related.sort_by_key(|p| std::cmp::Reverse(current.data.shared_tech_count(&p.data)));
        related.truncate(RELATED_SHOWN);

        Ok(related)
    }
}
