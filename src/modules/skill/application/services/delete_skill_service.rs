use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::incoming::use_cases::{DeleteSkillError, DeleteSkillUseCase};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct DeleteSkillService {
    store: Arc<dyn DocumentStore>,
}

impl DeleteSkillService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteSkillUseCase for DeleteSkillService {
    async fn execute(&self, skill_id: &str) -> Result<(), DeleteSkillError> {
        let removed = self
            .store
            .delete(collections::SKILLS, skill_id)
            .await
            .map_err(|e| DeleteSkillError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(DeleteSkillError::SkillNotFound);
        }

        tracing::info!(skill_id, "Skill deleted");
        Ok(())
    }
}
