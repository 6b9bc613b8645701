use actix_web::{put, web, Responder};
use tracing::error;

use super::{map_command_error, project_not_found};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    ProjectForm, SaveProjectCommand, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace a project with the submitted form
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project replaced", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Missing title or description", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ProjectForm>,
) -> impl Responder {
    let project_id = path.into_inner();

    let command = match SaveProjectCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.project.update.execute(&project_id, command).await {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::ProjectNotFound) => project_not_found(),
        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to update project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
