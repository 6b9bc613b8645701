mod delete_post;
mod get_post;
mod list_posts;
mod publish_post;
mod update_post;

pub use delete_post::{__path_delete_post_handler, delete_post_handler};
pub use get_post::{__path_get_post_handler, get_post_handler};
pub use list_posts::{__path_list_posts_handler, list_posts_handler};
pub use publish_post::{__path_publish_post_handler, publish_post_handler};
pub use update_post::{__path_update_post_handler, update_post_handler};

use crate::blog::application::ports::incoming::use_cases::PostCommandError;
use crate::shared::api::ApiResponse;

fn map_command_error(err: PostCommandError) -> actix_web::HttpResponse {
    tracing::warn!("Rejected blog post: {}", err);
    ApiResponse::validation_error(&err.to_string())
}

fn post_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
}
