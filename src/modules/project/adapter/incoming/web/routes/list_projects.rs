use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All projects in creation order
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
