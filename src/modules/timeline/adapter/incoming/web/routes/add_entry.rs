use actix_web::{web, HttpResponse};
use tracing::warn;

use super::{map_timeline_error, TimelineRoute};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::timeline::application::ports::incoming::use_cases::SaveEntryCommand;
use crate::AppState;

pub async fn add_entry_handler<E: TimelineRoute>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<E>,
) -> HttpResponse {
    let command = match SaveEntryCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(section = E::DOC_ID, "Rejected timeline entry: {}", e);
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    match E::use_cases(&data).add.execute(command).await {
        Ok(item) => ApiResponse::created(item),
        Err(e) => map_timeline_error::<E>(e),
    }
}
