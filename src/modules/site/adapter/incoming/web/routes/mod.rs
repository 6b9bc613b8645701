mod blog_pages;
mod contact_form;
mod home_page;
mod project_page;

pub use blog_pages::{blog_list_page_handler, blog_post_page_handler};
pub use contact_form::contact_form_handler;
pub use home_page::home_page_handler;
pub use project_page::project_page_handler;

use std::fmt::Display;

use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::site::adapter::incoming::web::render::{
    home::HomeContent, layout, Fetched, Unavailable,
};
use crate::AppState;

/// Logs a failed section fetch and keeps only the fact that it failed.
fn fetched<T, E: Display>(section: &str, result: Result<T, E>) -> Fetched<T> {
    result.map_err(|e| {
        error!(section = section, "Failed to load section: {}", e);
        Unavailable
    })
}

fn html_page(status: StatusCode, page_title: &str, site_title: &str, body: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(layout(page_title, site_title, body))
}

/// Every landing page section, fetched concurrently.
async fn load_home(data: &AppState) -> HomeContent {
    let (hero, about, contact, skills, projects, experience, education, awards, posts) = futures::join!(
        data.sections.hero.get.execute(),
        data.sections.about.get.execute(),
        data.sections.contact.get.execute(),
        data.skill.list.execute(),
        data.project.list.execute(),
        data.timeline.experience.list.execute(),
        data.timeline.education.list.execute(),
        data.timeline.awards.list.execute(),
        data.blog.list.execute(),
    );

    HomeContent {
        hero: fetched("hero", hero),
        about: fetched("about", about),
        skills: fetched("skills", skills),
        projects: fetched("projects", projects),
        experience: fetched("experience", experience),
        education: fetched("education", education),
        awards: fetched("awards", awards),
        posts: fetched("blog", posts),
        contact: fetched("contact", contact),
    }
}
