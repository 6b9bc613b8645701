use actix_web::{web, HttpResponse};

use super::{map_timeline_error, TimelineRoute};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub async fn list_entries_handler<E: TimelineRoute>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> HttpResponse {
    match E::use_cases(&data).list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_timeline_error::<E>(e),
    }
}
