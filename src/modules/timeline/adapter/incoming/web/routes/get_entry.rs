use actix_web::{web, HttpResponse};

use super::{map_timeline_error, TimelineRoute};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub async fn get_entry_handler<E: TimelineRoute>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<usize>,
) -> HttpResponse {
    match E::use_cases(&data).get.execute(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => map_timeline_error::<E>(e),
    }
}
