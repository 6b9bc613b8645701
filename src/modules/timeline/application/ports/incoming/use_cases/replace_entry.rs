use async_trait::async_trait;

use crate::timeline::application::domain::entities::{TimelineEntry, TimelineItem};
use crate::timeline::application::ports::incoming::use_cases::{SaveEntryCommand, TimelineError};

#[async_trait]
pub trait ReplaceEntryUseCase<E: TimelineEntry>: Send + Sync {
    /// Overwrites position `index`; every other entry is written back as read.
    async fn execute(
        &self,
        index: usize,
        command: SaveEntryCommand<E>,
    ) -> Result<TimelineItem<E>, TimelineError>;
}
