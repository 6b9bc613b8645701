use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use crate::{
    section::application::{
        domain::entities::SectionDocument,
        ports::incoming::use_cases::{SaveSectionCommand, SaveSectionError, SaveSectionUseCase},
    },
    store::application::{
        domain::entities::{collections, encode},
        ports::outgoing::DocumentStore,
    },
};

pub struct SaveSectionService<S> {
    store: Arc<dyn DocumentStore>,
    _section: PhantomData<fn() -> S>,
}

impl<S> SaveSectionService<S> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _section: PhantomData,
        }
    }
}

#[async_trait]
impl<S: SectionDocument> SaveSectionUseCase<S> for SaveSectionService<S> {
    async fn execute(&self, command: SaveSectionCommand<S>) -> Result<S, SaveSectionError> {
        let section = command.into_section();
        let data = encode(&section).map_err(|e| SaveSectionError::RepositoryError(e.to_string()))?;

        self.store
            .set(collections::PORTFOLIO, S::KEY, data)
            .await
            .map_err(|e| SaveSectionError::RepositoryError(e.to_string()))?;

        tracing::info!(section = S::KEY, "Section saved");
        Ok(section)
    }
}
