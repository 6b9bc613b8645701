use async_trait::async_trait;

use crate::timeline::application::domain::entities::{TimelineEntry, TimelineItem};
use crate::timeline::application::ports::incoming::use_cases::TimelineError;

#[async_trait]
pub trait ListEntriesUseCase<E: TimelineEntry>: Send + Sync {
    /// An unsaved section lists as empty.
    async fn execute(&self) -> Result<Vec<TimelineItem<E>>, TimelineError>;
}
