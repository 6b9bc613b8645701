use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::blog::application::domain::entities::{slugify, BlogPost};
use crate::shared::text::{clean, is_blank};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostForm {
    #[schema(example = "Shipping a Rust CMS")]
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostCommandError {
    #[error("Title and content are required")]
    MissingTitleOrContent,
}

/// Author-supplied fields of a post. Publish date and slug are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishPostCommand {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
}

impl PublishPostCommand {
    pub fn new(form: BlogPostForm) -> Result<Self, PostCommandError> {
        if is_blank(&form.title) || is_blank(&form.content) {
            return Err(PostCommandError::MissingTitleOrContent);
        }

        Ok(Self {
            title: clean(&form.title),
            content: clean(&form.content),
            excerpt: clean(&form.excerpt),
            image_url: clean(&form.image_url),
        })
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PublishPostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PublishPostUseCase: Send + Sync {
    async fn execute(&self, command: PublishPostCommand) -> Result<BlogPost, PublishPostError>;
}
