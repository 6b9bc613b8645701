use async_trait::async_trait;

use crate::section::application::domain::entities::{SectionDocument, SectionValidationError};

/// A trimmed section that passed its required-field check.
#[derive(Debug, Clone)]
pub struct SaveSectionCommand<S: SectionDocument> {
    section: S,
}

impl<S: SectionDocument> SaveSectionCommand<S> {
    pub fn new(section: S) -> Result<Self, SectionValidationError> {
        let section = section.normalize();
        section.validate()?;
        Ok(Self { section })
    }

    pub fn section(&self) -> &S {
        &self.section
    }

    pub fn into_section(self) -> S {
        self.section
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveSectionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SaveSectionUseCase<S: SectionDocument>: Send + Sync {
    async fn execute(&self, command: SaveSectionCommand<S>) -> Result<S, SaveSectionError>;
}
