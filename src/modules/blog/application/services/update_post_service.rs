use std::sync::Arc;

use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::{BlogPost, BlogPostData},
    ports::incoming::use_cases::{PublishPostCommand, UpdatePostError, UpdatePostUseCase},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct UpdatePostService {
    store: Arc<dyn DocumentStore>,
}

impl UpdatePostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdatePostUseCase for UpdatePostService {
    async fn execute(
        &self,
        post_id: &str,
        command: PublishPostCommand,
    ) -> Result<BlogPost, UpdatePostError> {
        let existing: BlogPostData = self
            .store
            .get(collections::BLOGS, post_id)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::PostNotFound)?
            .decode()
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?;

        let slug = command.slug();
        let data = BlogPostData {
            title: command.title,
            content: command.content,
            excerpt: command.excerpt,
            image_url: command.image_url,
            published_at: existing.published_at,
            slug,
        };
        let fields = encode(&data).map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?;

        self.store
            .set(collections::BLOGS, post_id, fields)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?;

        tracing::info!(post_id, "Blog post updated");
        Ok(BlogPost {
            id: post_id.to_string(),
            data,
        })
    }
}
