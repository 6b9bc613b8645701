use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::project::application::domain::entities::{Project, ProjectData, ProjectStatus};
use crate::shared::text::{clean, is_blank, split_list};

/// The project form as submitted. Gallery and features are comma separated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    #[schema(example = "Portfolio CMS")]
    pub title: String,
    pub subtitle: String,
    #[schema(example = "Server-rendered portfolio with an admin API")]
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    #[schema(example = "https://cdn.example.com/1.png, https://cdn.example.com/2.png")]
    pub gallery: String,
    pub live_url: String,
    pub github_url: String,
    #[schema(example = "Rust, Actix, PostgreSQL")]
    pub tech_stack: String,
    pub duration: String,
    pub role: String,
    pub team_size: String,
    /// Completed, In Progress or On Hold. Empty means Completed.
    pub status: String,
    #[schema(example = "Admin dashboard, Blog")]
    pub features: String,
    pub challenges: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveProjectCommandError {
    #[error("Title and description are required")]
    MissingTitleOrDescription,

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),
}

/// A complete project document, used for both create and full overwrite.
#[derive(Debug, Clone)]
pub struct SaveProjectCommand {
    data: ProjectData,
}

impl SaveProjectCommand {
    pub fn new(form: ProjectForm) -> Result<Self, SaveProjectCommandError> {
        if is_blank(&form.title) || is_blank(&form.description) {
            return Err(SaveProjectCommandError::MissingTitleOrDescription);
        }

        let status = match form.status.trim() {
            "" => ProjectStatus::default(),
            label => ProjectStatus::from_label(label)
                .ok_or_else(|| SaveProjectCommandError::UnknownStatus(label.to_string()))?,
        };

        Ok(Self {
            data: ProjectData {
                title: clean(&form.title),
                subtitle: clean(&form.subtitle),
                description: clean(&form.description),
                full_description: clean(&form.full_description),
                image_url: clean(&form.image_url),
                gallery: split_list(&form.gallery),
                live_url: clean(&form.live_url),
                github_url: clean(&form.github_url),
                tech_stack: clean(&form.tech_stack),
                duration: clean(&form.duration),
                role: clean(&form.role),
                team_size: clean(&form.team_size),
                status,
                features: split_list(&form.features),
                challenges: clean(&form.challenges),
            },
        })
    }

    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    pub fn into_data(self) -> ProjectData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: SaveProjectCommand) -> Result<Project, CreateProjectError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: &str,
        command: SaveProjectCommand,
    ) -> Result<Project, UpdateProjectError>;
}
