mod delete_post;
mod get_post;
mod list_posts;
mod publish_post;
mod update_post;

pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_post::{GetPostError, GetPostUseCase};
pub use list_posts::{ListPostsError, ListPostsUseCase};
pub use publish_post::{
    BlogPostForm, PostCommandError, PublishPostCommand, PublishPostError, PublishPostUseCase,
};
pub use update_post::{UpdatePostError, UpdatePostUseCase};
