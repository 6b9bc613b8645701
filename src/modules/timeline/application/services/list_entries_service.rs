use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::timeline_document::{decode_entry, read_entries};
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::{TimelineEntry, TimelineItem},
    ports::incoming::use_cases::{ListEntriesUseCase, TimelineError},
};

pub struct ListEntriesService<E> {
    store: Arc<dyn DocumentStore>,
    _entry: PhantomData<fn() -> E>,
}

impl<E> ListEntriesService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: TimelineEntry> ListEntriesUseCase<E> for ListEntriesService<E> {
    async fn execute(&self) -> Result<Vec<TimelineItem<E>>, TimelineError> {
        read_entries::<E>(self.store.as_ref())
            .await?
            .iter()
            .enumerate()
            .map(|(index, value)| decode_entry(index, value))
            .collect()
    }
}
