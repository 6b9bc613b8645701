pub mod domain;
pub mod ports;
pub mod section_use_cases;
pub mod services;

pub use section_use_cases::{SectionUseCases, Sections};
