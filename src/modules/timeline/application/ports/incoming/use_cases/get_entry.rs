use async_trait::async_trait;

use crate::timeline::application::domain::entities::{TimelineEntry, TimelineItem};
use crate::timeline::application::ports::incoming::use_cases::TimelineError;

#[async_trait]
pub trait GetEntryUseCase<E: TimelineEntry>: Send + Sync {
    async fn execute(&self, index: usize) -> Result<TimelineItem<E>, TimelineError>;
}
