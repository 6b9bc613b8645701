use actix_web::{get, http::StatusCode, web, Responder};

use super::{fetched, html_page};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::GetProjectError;
use crate::site::adapter::incoming::web::render::{
    project_detail::render_project_detail, Fetched, Unavailable,
};
use crate::AppState;

#[get("/projects/{id}")]
pub async fn project_page_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let project_id = path.into_inner();

    let project: Fetched<Option<Project>> = match data.project.get.execute(&project_id).await {
        Ok(project) => Ok(Some(project)),
        Err(GetProjectError::ProjectNotFound) => Ok(None),
        Err(e) => fetched("project", Err(e)),
    };

    let related = match &project {
        Ok(Some(_)) => fetched("related projects", data.project.related.execute(&project_id).await),
        _ => Ok(vec![]),
    };

    let (status, page_title) = match &project {
        Ok(Some(p)) => (StatusCode::OK, p.data.title.clone()),
        Ok(None) => (StatusCode::NOT_FOUND, "Project not found".to_string()),
        Err(Unavailable) => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    };

    let body = render_project_detail(&project, &related);
    html_page(status, &page_title, &data.site.title, &body)
}
