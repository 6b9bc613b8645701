use std::sync::Arc;

use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::incoming::use_cases::{ListPostsError, ListPostsUseCase},
};
use crate::store::application::{
    domain::entities::{collections, DocumentQuery, SortDirection},
    ports::outgoing::DocumentStore,
};

pub struct ListPostsService {
    store: Arc<dyn DocumentStore>,
}

impl ListPostsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListPostsUseCase for ListPostsService {
    async fn execute(&self) -> Result<Vec<BlogPost>, ListPostsError> {
        let query = DocumentQuery::all().order_by("publishedAt", SortDirection::Desc);

        self.store
            .list(collections::BLOGS, query)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?
            .iter()
            .map(BlogPost::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))
    }
}
