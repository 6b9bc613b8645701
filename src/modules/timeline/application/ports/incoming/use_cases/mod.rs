mod add_entry;
mod entry_command;
mod get_entry;
mod list_entries;
mod remove_entry;
mod replace_entry;
mod timeline_error;

pub use add_entry::AddEntryUseCase;
pub use entry_command::SaveEntryCommand;
pub use get_entry::GetEntryUseCase;
pub use list_entries::ListEntriesUseCase;
pub use remove_entry::RemoveEntryUseCase;
pub use replace_entry::ReplaceEntryUseCase;
pub use timeline_error::TimelineError;
