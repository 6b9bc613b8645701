use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::{
    domain::entities::Skill,
    ports::incoming::use_cases::{ListSkillsError, ListSkillsUseCase},
};
use crate::store::application::{
    domain::entities::{collections, DocumentQuery},
    ports::outgoing::DocumentStore,
};

pub struct ListSkillsService {
    store: Arc<dyn DocumentStore>,
}

impl ListSkillsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListSkillsUseCase for ListSkillsService {
    async fn execute(&self) -> Result<Vec<Skill>, ListSkillsError> {
        let documents = self
            .store
            .list(collections::SKILLS, DocumentQuery::all())
            .await
            .map_err(|e| ListSkillsError::RepositoryError(e.to_string()))?;

        documents
            .iter()
            .map(Skill::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ListSkillsError::RepositoryError(e.to_string()))
    }
}
