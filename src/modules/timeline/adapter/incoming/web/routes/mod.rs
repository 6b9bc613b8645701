use actix_web::{web, HttpResponse};

use crate::shared::api::ApiResponse;
use crate::timeline::application::{
    domain::entities::{Award, Education, Experience, TimelineEntry},
    ports::incoming::use_cases::TimelineError,
    TimelineUseCases,
};
use crate::AppState;

mod add_entry;
mod get_entry;
mod list_entries;
mod remove_entry;
mod replace_entry;

pub use add_entry::add_entry_handler;
pub use get_entry::get_entry_handler;
pub use list_entries::list_entries_handler;
pub use remove_entry::remove_entry_handler;
pub use replace_entry::replace_entry_handler;

/// Picks the use cases of one timeline out of the shared state.
pub trait TimelineRoute: TimelineEntry {
    /// Path segment under `/api`.
    const PATH: &'static str;

    fn use_cases(state: &AppState) -> &TimelineUseCases<Self>;
}

impl TimelineRoute for Experience {
    const PATH: &'static str = "experience";

    fn use_cases(state: &AppState) -> &TimelineUseCases<Self> {
        &state.timeline.experience
    }
}

impl TimelineRoute for Education {
    const PATH: &'static str = "education";

    fn use_cases(state: &AppState) -> &TimelineUseCases<Self> {
        &state.timeline.education
    }
}

impl TimelineRoute for Award {
    const PATH: &'static str = "awards";

    fn use_cases(state: &AppState) -> &TimelineUseCases<Self> {
        &state.timeline.awards
    }
}

fn map_timeline_error<E: TimelineEntry>(e: TimelineError) -> HttpResponse {
    match e {
        TimelineError::EntryNotFound(index) => {
            tracing::warn!(section = E::DOC_ID, index, "Timeline entry not found");
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
        }
        TimelineError::RepositoryError(msg) => {
            tracing::error!(section = E::DOC_ID, "Timeline store failure: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn timeline_scope<E: TimelineRoute>() -> actix_web::Scope {
    web::scope(&format!("/api/{}", E::PATH))
        .service(
            web::resource("")
                .route(web::get().to(list_entries_handler::<E>))
                .route(web::post().to(add_entry_handler::<E>)),
        )
        .service(
            web::resource("/{index}")
                .route(web::get().to(get_entry_handler::<E>))
                .route(web::put().to(replace_entry_handler::<E>))
                .route(web::delete().to(remove_entry_handler::<E>)),
        )
}

/// `/api/{experience,education,awards}` and `/api/{..}/{index}`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(timeline_scope::<Experience>())
        .service(timeline_scope::<Education>())
        .service(timeline_scope::<Award>());
}
