use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::timeline_document::{decode_entry, read_entries};
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::{TimelineEntry, TimelineItem},
    ports::incoming::use_cases::{GetEntryUseCase, TimelineError},
};

pub struct GetEntryService<E> {
    store: Arc<dyn DocumentStore>,
    _entry: PhantomData<fn() -> E>,
}

impl<E> GetEntryService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: TimelineEntry> GetEntryUseCase<E> for GetEntryService<E> {
    async fn execute(&self, index: usize) -> Result<TimelineItem<E>, TimelineError> {
        let entries = read_entries::<E>(self.store.as_ref()).await?;
        let value = entries.get(index).ok_or(TimelineError::EntryNotFound(index))?;
        decode_entry(index, value)
    }
}
