use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: &str) -> Result<(), DeleteSkillError>;
}
