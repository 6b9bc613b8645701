pub mod domain;
pub mod ports;
pub mod services;
pub mod timeline_use_cases;

pub use timeline_use_cases::{TimelineUseCases, Timelines};
