use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::message::application::domain::entities::Message;
use crate::message::application::ports::incoming::use_cases::{MessageForm, SubmitMessageCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Leave a message through the contact form
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = MessageForm,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<Message>)),
        (status = 400, description = "Missing field or malformed email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/messages")]
pub async fn submit_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<MessageForm>,
) -> impl Responder {
    let command = match SubmitMessageCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!("Rejected contact message: {}", e);
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    match data.message.submit.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
