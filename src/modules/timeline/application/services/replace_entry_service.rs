use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::timeline_document::{encode_entry, read_entries, write_entries};
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::{TimelineEntry, TimelineItem},
    ports::incoming::use_cases::{ReplaceEntryUseCase, SaveEntryCommand, TimelineError},
};

/// Read-modify-write without any version check: the last save wins.
pub struct ReplaceEntryService<E> {
    store: Arc<dyn DocumentStore>,
    _entry: PhantomData<fn() -> E>,
}

impl<E> ReplaceEntryService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: TimelineEntry> ReplaceEntryUseCase<E> for ReplaceEntryService<E> {
    async fn execute(
        &self,
        index: usize,
        command: SaveEntryCommand<E>,
    ) -> Result<TimelineItem<E>, TimelineError> {
        let entry = command.into_entry();
        let mut entries = read_entries::<E>(self.store.as_ref()).await?;

        let slot = entries
            .get_mut(index)
            .ok_or(TimelineError::EntryNotFound(index))?;
        *slot = encode_entry(&entry)?;

        write_entries::<E>(self.store.as_ref(), entries).await?;

        tracing::info!(section = E::DOC_ID, index, "Timeline entry replaced");
        Ok(TimelineItem { index, entry })
    }
}
