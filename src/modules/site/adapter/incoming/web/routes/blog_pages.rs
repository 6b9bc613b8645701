use actix_web::{get, http::StatusCode, web, Responder};

use super::{fetched, html_page};
use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::incoming::use_cases::GetPostError;
use crate::site::adapter::incoming::web::render::{
    blog::{render_blog_list, render_blog_post},
    Fetched, Unavailable,
};
use crate::AppState;

#[get("/blog")]
pub async fn blog_list_page_handler(data: web::Data<AppState>) -> impl Responder {
    let posts = fetched("blog", data.blog.list.execute().await);
    html_page(StatusCode::OK, "Blog", &data.site.title, &render_blog_list(&posts))
}

#[get("/blog/{id}")]
pub async fn blog_post_page_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    let post: Fetched<Option<BlogPost>> = match data.blog.get.execute(&post_id).await {
        Ok(post) => Ok(Some(post)),
        Err(GetPostError::PostNotFound) => Ok(None),
        Err(e) => fetched("blog post", Err(e)),
    };

    let (status, page_title) = match &post {
        Ok(Some(p)) => (StatusCode::OK, p.data.title.clone()),
        Ok(None) => (StatusCode::NOT_FOUND, "Post not found".to_string()),
        Err(Unavailable) => (StatusCode::INTERNAL_SERVER_ERROR, "Blog".to_string()),
    };

    html_page(status, &page_title, &data.site.title, &render_blog_post(&post))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::store::application::domain::entities::collections;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory_store::{FailingDocumentStore, InMemoryDocumentStore};

    async fn get(state: web::Data<AppState>, uri: &str) -> (u16, String) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(blog_list_page_handler)
                .service(blog_post_page_handler),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status().as_u16();
        (status, String::from_utf8(test::read_body(resp).await.to_vec()).unwrap())
    }

    fn store_with_posts() -> InMemoryDocumentStore {
        InMemoryDocumentStore::new()
            .with_document(
                collections::BLOGS,
                "old",
                json!({ "title": "Older", "content": "First", "publishedAt": "2023-05-01T00:00:00Z" }),
            )
            .with_document(
                collections::BLOGS,
                "new",
                json!({ "title": "Newer", "content": "Second", "publishedAt": "2024-05-01T00:00:00Z" }),
            )
    }

    #[actix_web::test]
    async fn list_is_newest_first() {
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(store_with_posts()))
            .build();

        let (status, html) = get(state, "/blog").await;

        assert_eq!(status, 200);
        let newer = html.find("Newer").unwrap();
        let older = html.find("Older").unwrap();
        assert!(newer < older);
    }

    #[actix_web::test]
    async fn post_page_uses_post_title() {
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(store_with_posts()))
            .build();

        let (status, html) = get(state, "/blog/new").await;

        assert_eq!(status, 200);
        assert!(html.contains("<title>Newer | Portfolio</title>"));
        assert!(html.contains("Published on May 1, 2024"));
    }

    #[actix_web::test]
    async fn unknown_post_is_not_found() {
        let (status, html) = get(TestAppStateBuilder::default().build(), "/blog/missing").await;

        assert_eq!(status, 404);
        assert!(html.contains("Blog post not found."));
    }

    #[actix_web::test]
    async fn store_failure_keeps_page_shell() {
        let state = TestAppStateBuilder::default()
            .with_store(Arc::new(FailingDocumentStore))
            .build();

        let (status, html) = get(state, "/blog").await;

        assert_eq!(status, 200);
        assert!(html.contains("Error loading blog posts. Please try again later."));
        assert!(html.contains("id=\"blog-posts\""));
    }
}
