use actix_web::{post, web, Responder};
use tracing::error;

use super::map_command_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::incoming::use_cases::{BlogPostForm, PublishPostCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Publish a new post
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    security(("BearerAuth" = [])),
    request_body = BlogPostForm,
    responses(
        (status = 201, description = "Post published", body = inline(SuccessResponse<BlogPost>)),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/blog")]
pub async fn publish_post_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<BlogPostForm>,
) -> impl Responder {
    let command = match PublishPostCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.blog.publish.execute(command).await {
        Ok(post) => ApiResponse::created(post),
        Err(e) => {
            error!("Failed to publish blog post: {}", e);
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
    async fn publishes_post() {
        // Arrange
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(publish_post_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer())
            .set_json(json!({ "title": "Hello World", "content": "First post", "excerpt": "Hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 201);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["slug"], "hello-world");
        assert!(json["data"]["publishedAt"].is_string());
        assert_eq!(store.ids("blogs").len(), 1);
    }

    #[actix_web::test]
    async fn missing_content_is_rejected() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .service(publish_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(bearer())
            .set_json(json!({ "title": "Hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["message"], "Title and content are required");
        assert_eq!(store.writes(), 0);
    }
}
