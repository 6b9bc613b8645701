use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use crate::{
    section::application::{
        domain::entities::SectionDocument,
        ports::incoming::use_cases::{GetSectionError, GetSectionUseCase},
    },
    store::application::{domain::entities::collections, ports::outgoing::DocumentStore},
};

pub struct GetSectionService<S> {
    store: Arc<dyn DocumentStore>,
    _section: PhantomData<fn() -> S>,
}

impl<S> GetSectionService<S> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _section: PhantomData,
        }
    }
}

#[async_trait]
impl<S: SectionDocument> GetSectionUseCase<S> for GetSectionService<S> {
    async fn execute(&self) -> Result<Option<S>, GetSectionError> {
        let document = self
            .store
            .get(collections::PORTFOLIO, S::KEY)
            .await
            .map_err(|e| GetSectionError::RepositoryError(e.to_string()))?;

        document
            .map(|doc| doc.decode::<S>())
            .transpose()
            .map_err(|e| GetSectionError::RepositoryError(e.to_string()))
    }
}
