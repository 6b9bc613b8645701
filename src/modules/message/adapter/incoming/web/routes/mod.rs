mod delete_message;
mod list_messages;
mod submit_message;

pub use delete_message::{__path_delete_message_handler, delete_message_handler};
pub use list_messages::{__path_list_messages_handler, list_messages_handler};
pub use submit_message::{__path_submit_message_handler, submit_message_handler};
