use std::sync::Arc;

use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::{Award, Education, Experience, TimelineEntry},
    ports::incoming::use_cases::{
        AddEntryUseCase, GetEntryUseCase, ListEntriesUseCase, RemoveEntryUseCase,
        ReplaceEntryUseCase,
    },
    services::{
        AddEntryService, GetEntryService, ListEntriesService, RemoveEntryService,
        ReplaceEntryService,
    },
};

#[derive(Clone)]
pub struct TimelineUseCases<E: TimelineEntry> {
    pub list: Arc<dyn ListEntriesUseCase<E> + Send + Sync>,
    pub get: Arc<dyn GetEntryUseCase<E> + Send + Sync>,
    pub add: Arc<dyn AddEntryUseCase<E> + Send + Sync>,
    pub replace: Arc<dyn ReplaceEntryUseCase<E> + Send + Sync>,
    pub remove: Arc<dyn RemoveEntryUseCase<E> + Send + Sync>,
}

impl<E: TimelineEntry> TimelineUseCases<E> {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            list: Arc::new(ListEntriesService::<E>::new(Arc::clone(&store))),
            get: Arc::new(GetEntryService::<E>::new(Arc::clone(&store))),
            add: Arc::new(AddEntryService::<E>::new(Arc::clone(&store))),
            replace: Arc::new(ReplaceEntryService::<E>::new(Arc::clone(&store))),
            remove: Arc::new(RemoveEntryService::<E>::new(store)),
        }
    }
}

#[derive(Clone)]
pub struct Timelines {
    pub experience: TimelineUseCases<Experience>,
    pub education: TimelineUseCases<Education>,
    pub awards: TimelineUseCases<Award>,
}

impl Timelines {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            experience: TimelineUseCases::with_store(Arc::clone(&store)),
            education: TimelineUseCases::with_store(Arc::clone(&store)),
            awards: TimelineUseCases::with_store(store),
        }
    }
}
