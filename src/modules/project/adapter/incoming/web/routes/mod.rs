mod create_project;
mod delete_project;
mod get_project;
mod list_projects;
mod related_projects;
mod update_project;

pub use create_project::{__path_create_project_handler, create_project_handler};
pub use delete_project::{__path_delete_project_handler, delete_project_handler};
pub use get_project::{__path_get_project_handler, get_project_handler};
pub use list_projects::{__path_list_projects_handler, list_projects_handler};
pub use related_projects::{__path_related_projects_handler, related_projects_handler};
pub use update_project::{__path_update_project_handler, update_project_handler};

use crate::project::application::ports::incoming::use_cases::SaveProjectCommandError;
use crate::shared::api::ApiResponse;

fn map_command_error(err: SaveProjectCommandError) -> actix_web::HttpResponse {
    tracing::warn!("Rejected project: {}", err);
    ApiResponse::validation_error(&err.to_string())
}

fn project_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
}
