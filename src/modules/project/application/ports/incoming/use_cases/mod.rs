mod delete_project;
mod get_project;
mod list_projects;
mod related_projects;
mod save_project;

pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use related_projects::{
    RelatedProjectsError, RelatedProjectsUseCase, RELATED_CANDIDATES, RELATED_SHOWN,
};
pub use save_project::{
    CreateProjectError, CreateProjectUseCase, ProjectForm, SaveProjectCommand,
    SaveProjectCommandError, UpdateProjectError, UpdateProjectUseCase,
};
