use std::sync::Arc;

use crate::section::application::{
    domain::entities::{About, Contact, Hero, SectionDocument},
    ports::incoming::use_cases::{GetSectionUseCase, SaveSectionUseCase},
    services::{GetSectionService, SaveSectionService},
};
use crate::store::application::ports::outgoing::DocumentStore;

#[derive(Clone)]
pub struct SectionUseCases<S: SectionDocument> {
    pub get: Arc<dyn GetSectionUseCase<S> + Send + Sync>,
    pub save: Arc<dyn SaveSectionUseCase<S> + Send + Sync>,
}

impl<S: SectionDocument> SectionUseCases<S> {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            get: Arc::new(GetSectionService::<S>::new(Arc::clone(&store))),
            save: Arc::new(SaveSectionService::<S>::new(store)),
        }
    }
}

#[derive(Clone)]
pub struct Sections {
    pub hero: SectionUseCases<Hero>,
    pub about: SectionUseCases<About>,
    pub contact: SectionUseCases<Contact>,
}

impl Sections {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            hero: SectionUseCases::with_store(Arc::clone(&store)),
            about: SectionUseCases::with_store(Arc::clone(&store)),
            contact: SectionUseCases::with_store(store),
        }
    }
}
