use std::sync::Arc;

use crate::blog::application::{
    ports::incoming::use_cases::{
        DeletePostUseCase, GetPostUseCase, ListPostsUseCase, PublishPostUseCase,
        UpdatePostUseCase,
    },
    services::{
        DeletePostService, GetPostService, ListPostsService, PublishPostService,
        UpdatePostService,
    },
};
use crate::store::application::ports::outgoing::DocumentStore;

#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub get: Arc<dyn GetPostUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishPostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}

impl BlogUseCases {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            list: Arc::new(ListPostsService::new(Arc::clone(&store))),
            get: Arc::new(GetPostService::new(Arc::clone(&store))),
            publish: Arc::new(PublishPostService::new(Arc::clone(&store))),
            update: Arc::new(UpdatePostService::new(Arc::clone(&store))),
            delete: Arc::new(DeletePostService::new(store)),
        }
    }
}
