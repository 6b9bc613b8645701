use std::sync::Arc;

use async_trait::async_trait;

use crate::blog::application::ports::incoming::use_cases::{DeletePostError, DeletePostUseCase};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct DeletePostService {
    store: Arc<dyn DocumentStore>,
}

impl DeletePostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeletePostUseCase for DeletePostService {
    async fn execute(&self, post_id: &str) -> Result<(), DeletePostError> {
        let removed = self
            .store
            .delete(collections::BLOGS, post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(DeletePostError::PostNotFound);
        }

        tracing::info!(post_id, "Blog post deleted");
        Ok(())
    }
}
