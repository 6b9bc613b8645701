mod delete_message;
mod list_messages;
mod submit_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use submit_message::{
    MessageForm, SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError,
    SubmitMessageUseCase,
};
