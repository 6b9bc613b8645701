use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::timeline_document::{encode_entry, read_entries, write_entries};
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::{TimelineEntry, TimelineItem},
    ports::incoming::use_cases::{AddEntryUseCase, SaveEntryCommand, TimelineError},
};

pub struct AddEntryService<E> {
    store: Arc<dyn DocumentStore>,
    _entry: PhantomData<fn() -> E>,
}

impl<E> AddEntryService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: TimelineEntry> AddEntryUseCase<E> for AddEntryService<E> {
    async fn execute(
        &self,
        command: SaveEntryCommand<E>,
    ) -> Result<TimelineItem<E>, TimelineError> {
        let entry = command.into_entry();
        let mut entries = read_entries::<E>(self.store.as_ref()).await?;
        let index = entries.len();

        entries.push(encode_entry(&entry)?);
        write_entries::<E>(self.store.as_ref(), entries).await?;

        tracing::info!(section = E::DOC_ID, index, "Timeline entry added");
        Ok(TimelineItem { index, entry })
    }
}
