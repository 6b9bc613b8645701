mod delete_post_service;
mod get_post_service;
mod list_posts_service;
mod publish_post_service;
mod update_post_service;

pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use list_posts_service::ListPostsService;
pub use publish_post_service::PublishPostService;
pub use update_post_service::UpdatePostService;
