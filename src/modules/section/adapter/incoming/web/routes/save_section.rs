use actix_web::{web, HttpResponse};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::section::adapter::incoming::web::routes::SectionRoute;
use crate::section::application::ports::incoming::use_cases::SaveSectionCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replaces the whole section document with the submitted form.
pub async fn save_section_handler<S: SectionRoute>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<S>,
) -> HttpResponse {
    let command = match SaveSectionCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(section = S::KEY, "Rejected section update: {}", e);
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    match S::use_cases(&data).save.execute(command).await {
        Ok(section) => ApiResponse::success(section),
        Err(e) => {
            error!(section = S::KEY, "Failed to save section: {}", e);
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
    use crate::tests::support::in_memory_store::InMemoryDocumentStore;

    #[actix_web::test]
    async fn saves_trimmed_hero() {
        // Arrange
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        // Act
        let req = test::TestRequest::put()
            .uri("/api/sections/hero")
            .insert_header(bearer())
            .set_json(json!({
                "name": " Ada ",
                "bio": "Engineer ",
                "socialLinks": [{ "name": "GitHub", "url": "https://github.com/ada", "icon": "fab fa-github" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["name"], "Ada");

        let stored = store.snapshot("portfolio", "hero").unwrap();
        assert_eq!(stored["bio"], "Engineer");
        assert_eq!(stored["socialLinks"][0]["name"], "GitHub");
    }

    #[actix_web::test]
    async fn about_without_description_is_rejected() {
        // Arrange
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::access(Uuid::new_v4()).into_data())
                .configure(configure),
        )
        .await;

        // Act
        let req = test::TestRequest::put()
            .uri("/api/sections/about")
            .insert_header(bearer())
            .set_json(json!({ "title": "About", "description": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 400);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Description is required");
        assert_eq!(store.writes(), 0);
    }
}
