use async_trait::async_trait;

use crate::timeline::application::domain::entities::{TimelineEntry, TimelineItem};
use crate::timeline::application::ports::incoming::use_cases::{SaveEntryCommand, TimelineError};

#[async_trait]
pub trait AddEntryUseCase<E: TimelineEntry>: Send + Sync {
    /// Appends to the end of the array.
    async fn execute(
        &self,
        command: SaveEntryCommand<E>,
    ) -> Result<TimelineItem<E>, TimelineError>;
}
