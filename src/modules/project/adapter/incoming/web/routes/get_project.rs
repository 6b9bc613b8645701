use actix_web::{get, web, Responder};
use tracing::error;

use super::project_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A single project, for the edit form
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Project>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get.execute(&project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::ProjectNotFound) => project_not_found(),
        Err(GetProjectError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to load project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use uuid::Uuid;

    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, read_json, StubTokenProvider};

    #[actix_web::test]
    async fn unknown_project_returns_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/missing")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
