mod get_section;
mod save_section;

pub use get_section::{GetSectionError, GetSectionUseCase};
pub use save_section::{SaveSectionCommand, SaveSectionError, SaveSectionUseCase};
