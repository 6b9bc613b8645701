use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::{
    domain::entities::Skill,
    ports::incoming::use_cases::{CreateSkillCommand, CreateSkillError, CreateSkillUseCase},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct CreateSkillService {
    store: Arc<dyn DocumentStore>,
}

impl CreateSkillService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CreateSkillUseCase for CreateSkillService {
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, CreateSkillError> {
        let data = command.into_data();
        let fields = encode(&data).map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?;

        let document = self
            .store
            .add(collections::SKILLS, fields)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?;

        tracing::info!(skill_id = %document.id, "Skill created");
        Ok(Skill::from_data(document.id, data))
    }
}
