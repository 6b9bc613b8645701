use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::message::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a message
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "messages",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/messages/{id}")]
pub async fn delete_message_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.delete.execute(&message_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteMessageError::MessageNotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(DeleteMessageError::RepositoryError(msg)) => {
            error!(message_id = %message_id, "Failed to delete message: {}", msg);
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
    use crate::tests::support::auth_helper::{bearer, read_json, StubTokenProvider};
    use crate::tests::support::in_memory_store::InMemoryDocumentStore;

    #[actix_web::test]
    async fn deletes_only_that_message() {
        let store = Arc::new(
            InMemoryDocumentStore::new()
                .with_document("messages", "m1", json!({ "name": "A" }))
                .with_document("messages", "m2", json!({ "name": "B" })),
        );
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(delete_message_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/messages/m1")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 204);
        assert_eq!(store.ids("messages"), vec!["m2".to_string()]);
    }

    #[actix_web::test]
    async fn unknown_message_returns_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(delete_message_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/messages/zzz")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "MESSAGE_NOT_FOUND");
    }
}
