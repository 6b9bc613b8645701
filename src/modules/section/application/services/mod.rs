mod get_section_service;
mod save_section_service;

pub use get_section_service::GetSectionService;
pub use save_section_service::SaveSectionService;
