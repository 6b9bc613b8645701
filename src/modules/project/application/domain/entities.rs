use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::text::split_list;
use crate::store::application::{domain::entities::Document, ports::outgoing::StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProjectStatus {
    #[default]
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Completed" => Some(Self::Completed),
            "In Progress" => Some(Self::InProgress),
            "On Hold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

/// Fields of a `projects/{id}` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    /// Comma separated, e.g. `Rust, Actix, PostgreSQL`.
    pub tech_stack: String,
    pub duration: String,
    pub role: String,
    pub team_size: String,
    pub status: ProjectStatus,
    pub features: Vec<String>,
    pub challenges: String,
}

impl ProjectData {
    pub fn tech_items(&self) -> Vec<String> {
        split_list(&self.tech_stack)
    }

    /// Tech items both projects list, ignoring case.
    pub fn shared_tech_count(&self, other: &ProjectData) -> usize {
        let mine: HashSet<String> = self
            .tech_items()
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        other
            .tech_items()
            .iter()
            .map(|t| t.to_lowercase())
            .collect::<HashSet<_>>()
            .intersection(&mine)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Project {
    pub id: String,
    #[serde(flatten)]
    pub data: ProjectData,
}

impl TryFrom<&Document> for Project {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id.clone(),
            data: doc.decode()?,
        })
    }
}
