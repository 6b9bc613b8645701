use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};

use crate::blog::application::{
    domain::entities::{BlogPost, BlogPostData},
    ports::incoming::use_cases::{PublishPostCommand, PublishPostError, PublishPostUseCase},
};
use crate::store::application::{
    domain::entities::{collections, encode},
    ports::outgoing::DocumentStore,
};

pub struct PublishPostService {
    store: Arc<dyn DocumentStore>,
}

impl PublishPostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PublishPostUseCase for PublishPostService {
    async fn execute(&self, command: PublishPostCommand) -> Result<BlogPost, PublishPostError> {
        let slug = command.slug();
        let data = BlogPostData {
            title: command.title,
            content: command.content,
            excerpt: command.excerpt,
            image_url: command.image_url,
            published_at: Some(Utc::now().trunc_subsecs(0)),
            slug,
        };
        let fields =
            encode(&data).map_err(|e| PublishPostError::RepositoryError(e.to_string()))?;

        let document = self
            .store
            .add(collections::BLOGS, fields)
            .await
            .map_err(|e| PublishPostError::RepositoryError(e.to_string()))?;

        tracing::info!(post_id = %document.id, slug = %data.slug, "Blog post published");
        Ok(BlogPost {
            id: document.id,
            data,
        })
    }
}
