use async_trait::async_trait;

use crate::timeline::application::domain::entities::TimelineEntry;
use crate::timeline::application::ports::incoming::use_cases::TimelineError;

#[async_trait]
pub trait RemoveEntryUseCase<E: TimelineEntry>: Send + Sync {
    /// Later entries shift down by one.
    async fn execute(&self, index: usize) -> Result<(), TimelineError>;
}
