use actix_web::{delete, web, Responder};
use tracing::error;

use super::project_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(&project_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProjectError::ProjectNotFound) => project_not_found(),
        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Failed to delete project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, StubTokenProvider};
    use crate::tests::support::in_memory_store::InMemoryDocumentStore;

    #[actix_web::test]
    async fn deletes_project() {
        let store = Arc::new(
            InMemoryDocumentStore::new().with_document("projects", "p1", json!({ "title": "A" })),
        );
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/projects/p1")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 204);
        assert!(store.ids("projects").is_empty());
    }
}
