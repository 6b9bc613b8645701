use crate::timeline::application::domain::entities::{TimelineEntry, TimelineValidationError};

#[derive(Debug, Clone)]
pub struct SaveEntryCommand<E: TimelineEntry> {
    entry: E,
}

impl<E: TimelineEntry> SaveEntryCommand<E> {
    pub fn new(entry: E) -> Result<Self, TimelineValidationError> {
        let entry = entry.normalize();
        entry.validate()?;
        Ok(Self { entry })
    }

    pub fn entry(&self) -> &E {
        &self.entry
    }

    pub fn into_entry(self) -> E {
        self.entry
    }
}
