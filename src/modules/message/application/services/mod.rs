mod delete_message_service;
mod list_messages_service;
mod submit_message_service;

pub use delete_message_service::DeleteMessageService;
pub use list_messages_service::ListMessagesService;
pub use submit_message_service::SubmitMessageService;
