use std::sync::Arc;

use crate::project::application::{
    ports::incoming::use_cases::{
        CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
        RelatedProjectsUseCase, UpdateProjectUseCase,
    },
    services::{
        CreateProjectService, DeleteProjectService, GetProjectService, ListProjectsService,
        RelatedProjectsService, UpdateProjectService,
    },
};
use crate::store::application::ports::outgoing::DocumentStore;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub related: Arc<dyn RelatedProjectsUseCase + Send + Sync>,
}

impl ProjectUseCases {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            list: Arc::new(ListProjectsService::new(Arc::clone(&store))),
            get: Arc::new(GetProjectService::new(Arc::clone(&store))),
            create: Arc::new(CreateProjectService::new(Arc::clone(&store))),
            update: Arc::new(UpdateProjectService::new(Arc::clone(&store))),
            delete: Arc::new(DeleteProjectService::new(Arc::clone(&store))),
            related: Arc::new(RelatedProjectsService::new(store)),
        }
    }
}
