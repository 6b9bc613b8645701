use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListSkillsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, ListSkillsError>;
}
