mod add_entry_service;
mod get_entry_service;
mod list_entries_service;
mod remove_entry_service;
mod replace_entry_service;
mod timeline_document;

pub use add_entry_service::AddEntryService;
pub use get_entry_service::GetEntryService;
pub use list_entries_service::ListEntriesService;
pub use remove_entry_service::RemoveEntryService;
pub use replace_entry_service::ReplaceEntryService;
