use std::sync::Arc;

use crate::message::application::{
    ports::incoming::use_cases::{
        DeleteMessageUseCase, ListMessagesUseCase, SubmitMessageUseCase,
    },
    services::{DeleteMessageService, ListMessagesService, SubmitMessageService},
};
use crate::store::application::ports::outgoing::DocumentStore;

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}

impl MessageUseCases {
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            submit: Arc::new(SubmitMessageService::new(Arc::clone(&store))),
            list: Arc::new(ListMessagesService::new(Arc::clone(&store))),
            delete: Arc::new(DeleteMessageService::new(store)),
        }
    }
}
