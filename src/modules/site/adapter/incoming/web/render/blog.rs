use super::{container, error_message, esc, message, preview, publish_date, Fetched};
use crate::blog::application::domain::entities::BlogPost;

pub fn post_card(post: &BlogPost) -> String {
    let teaser = if post.data.excerpt.is_empty() {
        &post.data.content
    } else {
        &post.data.excerpt
    };
    format!(
        "<article class=\"blog-card\"><h3 class=\"text-xl font-bold mb-2\">{}</h3><p class=\"text-gray-500 text-sm mb-4\">Published on {}</p><p class=\"text-gray-600 mb-4\">{}</p><a href=\"/blog/{}\" class=\"read-more\">Read More &rarr;</a></article>",
        esc(&post.data.title),
        publish_date(post.data.published_at),
        esc(&preview(teaser, 200)),
        esc(&post.id)
    )
}

pub fn render_blog_list(posts: &Fetched<Vec<BlogPost>>) -> String {
    let inner = match posts {
        Err(_) => error_message("Error loading blog posts. Please try again later."),
        Ok(posts) if posts.is_empty() => message("No blog posts available yet."),
        Ok(posts) => posts.iter().map(post_card).collect(),
    };
    format!(
        "<section class=\"section\"><h1>Blog</h1>{}</section>",
        container("blog-posts", "blog-grid", &inner)
    )
}

pub fn render_blog_post(post: &Fetched<Option<BlogPost>>) -> String {
    let inner = match post {
        Err(_) => error_message("Error loading blog post. Please try again later."),
        Ok(None) => error_message("Blog post not found."),
        Ok(Some(post)) => {
            let image = if post.data.image_url.is_empty() {
                String::new()
            } else {
                format!(
                    "<img src=\"{}\" alt=\"{}\" class=\"blog-image\">",
                    esc(&post.data.image_url),
                    esc(&post.data.title)
                )
            };
            format!(
                "<article><h1 class=\"text-4xl font-bold mb-4\">{}</h1><p class=\"text-gray-500 mb-8\">Published on {}</p>{}<div class=\"whitespace-pre-line\">{}</div></article>",
                esc(&post.data.title),
                publish_date(post.data.published_at),
                image,
                esc(&post.data.content)
            )
        }
    };
    format!(
        "<section class=\"section\">{}<p><a href=\"/blog\">&larr; Back to Blog</a></p></section>",
        container("blog-post-content", "blog-post", &inner)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::application::domain::entities::BlogPostData;
    use crate::site::adapter::incoming::web::render::Unavailable;
    use chrono::{TimeZone, Utc};

    fn post(id: &str, excerpt: &str, content: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            data: BlogPostData {
                title: "Hello".to_string(),
                content: content.to_string(),
                excerpt: excerpt.to_string(),
                published_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
                slug: "hello".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn card_prefers_excerpt_and_links_to_post() {
        let html = post_card(&post("b1", "Teaser", "Body"));

        assert!(html.contains("Teaser..."));
        assert!(!html.contains("Body"));
        assert!(html.contains("Published on Jan 15, 2024"));
        assert!(html.contains("href=\"/blog/b1\""));
    }

    #[test]
    fn card_falls_back_to_content() {
        let html = post_card(&post("b1", "", &"c".repeat(250)));
        assert!(html.contains(&format!("{}...", "c".repeat(200))));
    }

    #[test]
    fn list_states_have_their_own_messages() {
        assert!(render_blog_list(&Ok(vec![])).contains("No blog posts available yet."));
        assert!(render_blog_list(&Err(Unavailable))
            .contains("Error loading blog posts. Please try again later."));
    }

    #[test]
    fn post_page_escapes_content() {
        let html = render_blog_post(&Ok(Some(post("b1", "", "<img onerror=x>\nline two"))));

        assert!(html.contains("&lt;img onerror=x&gt;\nline two"));
        assert!(html.contains("Back to Blog"));
    }

    #[test]
    fn missing_post_has_message() {
        assert!(render_blog_post(&Ok(None)).contains("Blog post not found."));
        assert!(render_blog_post(&Err(Unavailable)).contains("Error loading blog post."));
    }
}
