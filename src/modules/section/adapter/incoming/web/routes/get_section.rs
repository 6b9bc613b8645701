use actix_web::{web, HttpResponse};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::section::adapter::incoming::web::routes::SectionRoute;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current section contents for the edit form; an unsaved section comes back
/// with every field empty.
pub async fn get_section_handler<S: SectionRoute>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> HttpResponse {
    match S::use_cases(&data).get.execute().await {
        Ok(section) => ApiResponse::success(section.unwrap_or_default()),
        Err(e) => {
            error!(section = S::KEY, "Failed to load section: {}", e);
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

    use crate::section::adapter::incoming::web::routes::configure;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, read_json, StubTokenProvider};
    use crate::tests::support::in_memory_store::{FailingDocumentStore, InMemoryDocumentStore};

    #[actix_web::test]
    async fn unsaved_section_returns_empty_form() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/sections/hero")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["name"], "");
        assert_eq!(json["data"]["socialLinks"], json!([]));
    }

    #[actix_web::test]
    async fn returns_stored_about_section() {
        // Arrange
        let store = InMemoryDocumentStore::new().with_document(
            "portfolio",
            "about",
            json!({ "title": "Who I am", "description": "Builder of things" }),
        );
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/sections/about")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["title"], "Who I am");
        assert_eq!(json["data"]["facts"]["location"], "");
    }

    #[actix_web::test]
    async fn requires_admin_token() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/sections/contact")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn store_failure_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(FailingDocumentStore))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/sections/hero")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
