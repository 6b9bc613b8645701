use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::application::{domain::entities::Document, ports::outgoing::StoreError};

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid slug regex"));

/// `lowercase(title)` with every run outside `[a-z0-9]` collapsed to one `-`.
///
/// Leading and trailing dashes are kept, so `"Hello, World!"` becomes
/// `"hello-world-"`.
pub fn slugify(title: &str) -> String {
    NON_SLUG_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

/// Fields of a `blogs/{id}` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostData {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    /// Whole seconds, so the stored RFC 3339 text sorts chronologically.
    pub published_at: Option<DateTime<Utc>>,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPost {
    pub id: String,
    #[serde(flatten)]
    pub data: BlogPostData,
}

impl TryFrom<&Document> for BlogPost {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id.clone(),
            data: doc.decode()?,
        })
    }
}
