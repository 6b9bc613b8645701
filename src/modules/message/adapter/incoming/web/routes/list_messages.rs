use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::message::application::domain::entities::Message;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Inbox, newest first
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Messages", body = inline(SuccessResponse<Vec<Message>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/messages")]
pub async fn list_messages_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => {
            error!("Failed to list messages: {}", e);
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
    async fn admin_reads_inbox() {
        // Arrange
        let store = InMemoryDocumentStore::new().with_document(
            "messages",
            "m1",
            json!({ "name": "Grace", "email": "g@x.io", "message": "Hi", "createdAt": "2024-01-01T00:00:00Z" }),
        );
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(list_messages_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/messages")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);
        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["id"], "m1");
        assert_eq!(json["data"][0]["createdAt"], "2024-01-01T00:00:00Z");
    }

    #[actix_web::test]
    async fn inbox_requires_admin_token() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/messages").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
