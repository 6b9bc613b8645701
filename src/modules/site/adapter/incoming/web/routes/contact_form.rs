use actix_web::{http::StatusCode, post, web, Responder};
use tracing::{error, info, warn};

use super::{html_page, load_home};
use crate::message::application::ports::incoming::use_cases::{MessageForm, SubmitMessageCommand};
use crate::site::adapter::incoming::web::render::home::{render_home, ContactNotice};
use crate::AppState;

/// Browser fallback for the contact form; re-renders the landing page with the outcome.
#[post("/contact")]
pub async fn contact_form_handler(
    data: web::Data<AppState>,
    form: web::Form<MessageForm>,
) -> impl Responder {
    let (status, notice) = match SubmitMessageCommand::new(form.into_inner()) {
        Err(e) => {
            warn!("Rejected contact form: {}", e);
            (StatusCode::BAD_REQUEST, ContactNotice::Rejected(e.to_string()))
        }
        Ok(command) => match data.message.submit.execute(command).await {
            Ok(message) => {
                info!(message_id = %message.id, "Contact form submitted");
                (StatusCode::CREATED, ContactNotice::Sent)
            }
            Err(e) => {
                error!("Failed to store contact form: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ContactNotice::Failed)
            }
        },
    };

    let content = load_home(&data).await;
    let body = render_home(&content, &data.site.title, Some(&notice));
    html_page(status, "", &data.site.title, &body)
}
