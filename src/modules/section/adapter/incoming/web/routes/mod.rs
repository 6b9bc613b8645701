use actix_web::web;

use crate::section::application::{
    domain::entities::{About, Contact, Hero, SectionDocument},
    SectionUseCases,
};
use crate::AppState;

mod get_section;
mod save_section;

pub use get_section::get_section_handler;
pub use save_section::save_section_handler;

/// Picks the use cases of one section out of the shared state.
pub trait SectionRoute: SectionDocument {
    fn use_cases(state: &AppState) -> &SectionUseCases<Self>;
}

impl SectionRoute for Hero {
    fn use_cases(state: &AppState) -> &SectionUseCases<Self> {
        &state.sections.hero
    }
}

impl SectionRoute for About {
    fn use_cases(state: &AppState) -> &SectionUseCases<Self> {
        &state.sections.about
    }
}

impl SectionRoute for Contact {
    fn use_cases(state: &AppState) -> &SectionUseCases<Self> {
        &state.sections.contact
    }
}

fn section_resource<S: SectionRoute>() -> actix_web::Resource {
    web::resource(format!("/api/sections/{}", S::KEY))
        .route(web::get().to(get_section_handler::<S>))
        .route(web::put().to(save_section_handler::<S>))
}

/// `GET|PUT /api/sections/{hero,about,contact}`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(section_resource::<Hero>())
        .service(section_resource::<About>())
        .service(section_resource::<Contact>());
}
