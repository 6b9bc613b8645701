use actix_web::{get, web, Responder};
use tracing::error;

use super::project_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::RelatedProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Up to three projects related to the given one
#[utoipa::path(
    get,
    path = "/api/projects/{id}/related",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Related projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}/related")]
pub async fn related_projects_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.related.execute(&project_id).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(RelatedProjectsError::ProjectNotFound) => project_not_found(),
        Err(RelatedProjectsError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to load related projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
