//! HTML fragments for the public pages.
//!
//! Every section renders into a container with a fixed element id. A section
//! whose data could not be fetched renders a static message in its own
//! container and leaves the rest of the page intact.

use chrono::{DateTime, Datelike, Utc};

use crate::shared::text::{html_escape, truncate_chars};

pub mod blog;
pub mod home;
pub mod project_detail;

/// Stand-in image for projects saved without one.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.png";

/// Marker for a section whose fetch failed; the cause is logged by the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unavailable;

pub type Fetched<T> = Result<T, Unavailable>;

pub fn esc(value: &str) -> String {
    html_escape(value)
}

/// First `max` characters followed by `...`, always.
pub fn preview(value: &str, max: usize) -> String {
    format!("{}...", truncate_chars(value, max))
}

/// `Mar 5, 2024`, or `Draft` for posts without a publish date.
pub fn publish_date(published_at: Option<DateTime<Utc>>) -> String {
    published_at
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Draft".to_string())
}

pub fn message(text: &str) -> String {
    format!("<p class=\"text-center text-gray-600\">{}</p>", esc(text))
}

pub fn error_message(text: &str) -> String {
    format!("<p class=\"text-center text-red-600\">{}</p>", esc(text))
}

pub fn container(id: &str, class: &str, inner: &str) -> String {
    format!("<div id=\"{id}\" class=\"{class}\">{inner}</div>")
}

/// Full document around a page body.
pub fn layout(page_title: &str, site_title: &str, body: &str) -> String {
    let title = if page_title.is_empty() {
        esc(site_title)
    } else {
        format!("{} | {}", esc(page_title), esc(site_title))
    };
    let year = Utc::now().year();
    let site = esc(site_title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/css/style.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body>
<header class="sticky-header">
<nav class="main-nav">
<a href="/" class="logo">{site}</a>
<a href="/#about">About</a>
<a href="/#skills">Skills</a>
<a href="/#projects">Projects</a>
<a href="/#experience">Experience</a>
<a href="/blog">Blog</a>
<a href="/#contact">Contact</a>
</nav>
</header>
<main>
{body}
</main>
<footer class="footer">
<p>&copy; <span id="year">{year}</span> {site}</p>
</footer>
</body>
</html>
"#
    )
}
