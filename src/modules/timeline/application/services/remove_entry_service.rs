use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::timeline_document::{read_entries, write_entries};
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::{
    domain::entities::TimelineEntry,
    ports::incoming::use_cases::{RemoveEntryUseCase, TimelineError},
};

pub struct RemoveEntryService<E> {
    store: Arc<dyn DocumentStore>,
    _entry: PhantomData<fn() -> E>,
}

impl<E> RemoveEntryService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: TimelineEntry> RemoveEntryUseCase<E> for RemoveEntryService<E> {
    async fn execute(&self, index: usize) -> Result<(), TimelineError> {
        let mut entries = read_entries::<E>(self.store.as_ref()).await?;

        if index >= entries.len() {
            return Err(TimelineError::EntryNotFound(index));
        }
        entries.remove(index);

        write_entries::<E>(self.store.as_ref(), entries).await?;

        tracing::info!(section = E::DOC_ID, index, "Timeline entry removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::in_memory_store::InMemoryDocumentStore;
    use crate::timeline::application::domain::entities::Award;

    #[tokio::test]
    async fn later_entries_shift_down() {
        let store = Arc::new(InMemoryDocumentStore::new().with_document(
            "portfolio",
            "awards",
            json!({ "awards": [
                { "title": "A", "issuer": "X", "date": "1" },
                { "title": "B", "issuer": "X", "date": "2" },
                { "title": "C", "issuer": "X", "date": "3" }
            ]}),
        ));
        let service = RemoveEntryService::<Award>::new(store.clone());

        service.execute(0).await.unwrap();

        let stored = store.snapshot("portfolio", "awards").unwrap();
        assert_eq!(stored["awards"].as_array().unwrap().len(), 2);
        assert_eq!(stored["awards"][0]["title"], "B");
    }

    #[tokio::test]
    async fn missing_section_has_no_entries() {
        let service = RemoveEntryService::<Award>::new(Arc::new(InMemoryDocumentStore::new()));

        assert_eq!(service.execute(0).await, Err(TimelineError::EntryNotFound(0)));
    }
}
