use actix_web::{post, web, Responder};
use tracing::error;

use super::map_command_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{ProjectForm, SaveProjectCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("BearerAuth" = [])),
    request_body = ProjectForm,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Missing title or description", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<ProjectForm>,
) -> impl Responder {
    let command = match SaveProjectCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.project.create.execute(command).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => {
            error!("Failed to create project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
