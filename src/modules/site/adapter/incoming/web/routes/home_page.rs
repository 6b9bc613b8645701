use actix_web::{get, http::StatusCode, web, Responder};

use super::{html_page, load_home};
use crate::site::adapter::incoming::web::render::home::render_home;
use crate::AppState;

#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>) -> impl Responder {
    let content = load_home(&data).await;
    let body = render_home(&content, &data.site.title, None);
    html_page(StatusCode::OK, "", &data.site.title, &body)
}
