use std::sync::Arc;

use crate::skill::application::{
    ports::incoming::use_cases::{CreateSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase},
    services::{CreateSkillService, DeleteSkillService, ListSkillsService},
};
use crate::store::application::ports::outgoing::DocumentStore;

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}

impl SkillUseCases {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            list: Arc::new(ListSkillsService::new(Arc::clone(&store))),
            create: Arc::new(CreateSkillService::new(Arc::clone(&store))),
            delete: Arc::new(DeleteSkillService::new(store)),
        }
    }
}
