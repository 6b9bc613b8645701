use std::sync::Arc;

use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::incoming::use_cases::{GetPostError, GetPostUseCase},
};
use crate::store::application::{domain::entities::collections, ports::outgoing::DocumentStore};

pub struct GetPostService {
    store: Arc<dyn DocumentStore>,
}

impl GetPostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetPostUseCase for GetPostService {
    async fn execute(&self, post_id: &str) -> Result<BlogPost, GetPostError> {
        let document = self
            .store
            .get(collections::BLOGS, post_id)
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))?
            .ok_or(GetPostError::PostNotFound)?;

        BlogPost::try_from(&document).map_err(|e| GetPostError::RepositoryError(e.to_string()))
    }
}
