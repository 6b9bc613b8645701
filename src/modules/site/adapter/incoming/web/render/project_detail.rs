use super::{container, error_message, esc, home::project_card, message, preview, Fetched};
use crate::project::application::domain::entities::{Project, ProjectData};

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

pub fn render_project_detail(
    project: &Fetched<Option<Project>>,
    related: &Fetched<Vec<Project>>,
) -> String {
    let detail = match project {
        Err(_) => error_message("Error loading project details."),
        Ok(None) => error_message("Project not found."),
        Ok(Some(project)) => details(&project.data),
    };

    let related_inner = match (project, related) {
        (Ok(Some(_)), Ok(projects)) if projects.is_empty() => message("No related projects found."),
        (Ok(Some(_)), Ok(projects)) => projects.iter().map(|p| project_card(p, 80)).collect(),
        _ => String::new(),
    };

    format!(
        "<section class=\"section\">{}</section><section class=\"section\"><h2>Related Projects</h2>{}</section><p class=\"text-center\"><a href=\"/#projects\">&larr; Back to Projects</a></p>",
        container("project-detail-content", "project-detail", &detail),
        container("related-projects", "projects-grid", &related_inner)
    )
}

fn details(data: &ProjectData) -> String {
    let mut html = format!("<h1 class=\"project-title\">{}</h1>", esc(&data.title));

    let subtitle = if data.subtitle.is_empty() {
        preview(&data.description, 100)
    } else {
        data.subtitle.clone()
    };
    html.push_str(&format!("<p class=\"project-subtitle\">{}</p>", esc(&subtitle)));

    let badges: String = data
        .tech_items()
        .iter()
        .map(|tech| format!("<span class=\"tech-badge\">{}</span>", esc(tech)))
        .collect();
    html.push_str(&format!("<div class=\"tech-stack\">{badges}</div>"));

    html.push_str("<div class=\"project-links\">");
    if !data.live_url.is_empty() {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"btn\" target=\"_blank\" rel=\"noopener\"><i class=\"fas fa-external-link-alt\"></i> Live Demo</a>",
            esc(&data.live_url)
        ));
    }
    if !data.github_url.is_empty() {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"btn btn-outline\" target=\"_blank\" rel=\"noopener\"><i class=\"fab fa-github\"></i> View Code</a>",
            esc(&data.github_url)
        ));
    }
    html.push_str("</div>");

    if !data.image_url.is_empty() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"project-main-image\">",
            esc(&data.image_url),
            esc(&data.title)
        ));
    }

    if !data.gallery.is_empty() {
        let images: String = data
            .gallery
            .iter()
            .map(|url| {
                format!(
                    "<img src=\"{}\" alt=\"{}\" class=\"gallery-image\">",
                    esc(url),
                    esc(&data.title)
                )
            })
            .collect();
        html.push_str(&format!("<div class=\"project-gallery\">{images}</div>"));
    }

    let overview = or_default(&data.full_description, &data.description);
    html.push_str(&format!(
        "<div class=\"project-overview\"><h2>Overview</h2><p class=\"whitespace-pre-line\">{}</p></div>",
        esc(overview)
    ));

    html.push_str(&format!(
        "<ul class=\"project-meta\"><li><strong>Duration:</strong> {}</li><li><strong>Role:</strong> {}</li><li><strong>Team Size:</strong> {}</li><li><strong>Status:</strong> {}</li></ul>",
        esc(or_default(&data.duration, "Not specified")),
        esc(or_default(&data.role, "Developer")),
        esc(or_default(&data.team_size, "1")),
        data.status.label()
    ));

    if !data.features.is_empty() {
        let items: String = data
            .features
            .iter()
            .map(|f| format!("<li>{}</li>", esc(f)))
            .collect();
        html.push_str(&format!(
            "<div class=\"project-features\"><h2>Key Features</h2><ul>{items}</ul></div>"
        ));
    }

    if !data.challenges.is_empty() {
        html.push_str(&format!(
            "<div class=\"project-challenges\"><h2>Challenges &amp; Solutions</h2><p class=\"whitespace-pre-line\">{}</p></div>",
            esc(&data.challenges)
        ));
    }

    html
}
