#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("No entry at index {0}")]
    EntryNotFound(usize),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
