use super::{blog::post_card, container, error_message, esc, message, preview, Fetched};
use super::PLACEHOLDER_IMAGE;
use crate::blog::application::domain::entities::BlogPost;
use crate::project::application::domain::entities::Project;
use crate::section::application::domain::entities::{About, Contact, Hero, SocialLink};
use crate::skill::application::domain::entities::Skill;
use crate::timeline::application::domain::entities::{Award, Education, Experience, TimelineItem};

/// Posts teased on the landing page.
pub const BLOG_PREVIEW_COUNT: usize = 3;

const DEFAULT_SKILL_ICON: &str = "fas fa-code";

/// Everything the landing page shows, each section fetched on its own.
#[derive(Debug, Clone)]
pub struct HomeContent {
    pub hero: Fetched<Option<Hero>>,
    pub about: Fetched<Option<About>>,
    pub skills: Fetched<Vec<Skill>>,
    pub projects: Fetched<Vec<Project>>,
    pub experience: Fetched<Vec<TimelineItem<Experience>>>,
    pub education: Fetched<Vec<TimelineItem<Education>>>,
    pub awards: Fetched<Vec<TimelineItem<Award>>>,
    pub posts: Fetched<Vec<BlogPost>>,
    pub contact: Fetched<Option<Contact>>,
}

/// Outcome of a contact form submission, shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Rejected(String),
    Failed,
}

impl ContactNotice {
    fn render(&self) -> String {
        match self {
            Self::Sent => format!(
                "<p class=\"form-notice success\">{}</p>",
                esc("Thank you for your message! I will get back to you soon.")
            ),
            Self::Rejected(reason) => {
                format!("<p class=\"form-notice error\">{}</p>", esc(reason))
            }
            Self::Failed => format!(
                "<p class=\"form-notice error\">{}</p>",
                esc("Your message could not be sent. Please try again later.")
            ),
        }
    }
}

pub fn render_home(content: &HomeContent, site_title: &str, notice: Option<&ContactNotice>) -> String {
    let hero_bio_override = match &content.about {
        Ok(Some(about)) if !about.hero_bio.is_empty() => Some(about.hero_bio.as_str()),
        _ => None,
    };

    let mut body = String::new();
    body.push_str(&format!(
        "<section id=\"home\" class=\"section hero-section\">{}</section>",
        hero(&content.hero, hero_bio_override, site_title)
    ));
    body.push_str(&format!(
        "<section id=\"about\" class=\"section\"><h2>About Me</h2>{}</section>",
        about(&content.about)
    ));
    body.push_str(&format!(
        "<section id=\"skills\" class=\"section\"><h2>Skills</h2>{}</section>",
        skills(&content.skills)
    ));
    body.push_str(&format!(
        "<section id=\"projects\" class=\"section\"><h2>Projects</h2>{}</section>",
        projects(&content.projects)
    ));
    body.push_str(&format!(
        "<section id=\"experience\" class=\"section\"><h2>Experience</h2>{}</section>",
        experience(&content.experience)
    ));
    body.push_str(&format!(
        "<section id=\"education\" class=\"section\"><h2>Education</h2>{}</section>",
        education(&content.education)
    ));
    body.push_str(&format!(
        "<section id=\"awards\" class=\"section\"><h2>Awards &amp; Certifications</h2>{}</section>",
        awards(&content.awards)
    ));
    body.push_str(&format!(
        "<section id=\"blog\" class=\"section\"><h2>Latest Posts</h2>{}<p class=\"text-center\"><a href=\"/blog\">View all posts</a></p></section>",
        blog_preview(&content.posts)
    ));
    body.push_str(&format!(
        "<section id=\"contact\" class=\"section\"><h2>Get In Touch</h2>{}{}</section>",
        contact_info(&content.contact),
        contact_form(notice)
    ));
    body
}

fn social_links(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{}\"><i class=\"{}\"></i></a>",
                esc(&link.url),
                esc(&link.name),
                esc(&link.icon)
            )
        })
        .collect()
}

pub fn hero(section: &Fetched<Option<Hero>>, bio_override: Option<&str>, site_title: &str) -> String {
    let inner = match section {
        Err(_) => error_message("Error loading profile."),
        Ok(None) => format!("<h1 id=\"hero-name\">{}</h1>", esc(site_title)),
        Ok(Some(hero)) => {
            let mut html = String::new();
            if !hero.image_url.is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" class=\"hero-image\">",
                    esc(&hero.image_url),
                    esc(&hero.name)
                ));
            }
            html.push_str(&format!(
                "<h1 id=\"hero-name\">{}</h1><p id=\"hero-bio\">{}</p>",
                esc(&hero.name),
                esc(bio_override.unwrap_or(&hero.bio))
            ));
            html.push_str("<div class=\"hero-links\">");
            if !hero.cv_url.is_empty() {
                html.push_str(&format!(
                    "<a href=\"{}\" class=\"btn\" target=\"_blank\" rel=\"noopener\"><i class=\"fas fa-download\"></i> Download CV</a>",
                    esc(&hero.cv_url)
                ));
            }
            html.push_str(&social_links(&hero.social_links));
            html.push_str("</div>");
            html
        }
    };
    container("hero", "hero-content", &inner)
}

pub fn about(section: &Fetched<Option<About>>) -> String {
    let inner = match section {
        Err(_) => message("Error loading about section."),
        Ok(None) => message("About content could not be loaded."),
        Ok(Some(about)) => {
            let mut html = String::new();
            if !about.image_url.is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" class=\"about-image\">",
                    esc(&about.image_url),
                    esc(&about.title)
                ));
            }
            if !about.title.is_empty() {
                html.push_str(&format!("<h3>{}</h3>", esc(&about.title)));
            }
            html.push_str(&format!("<p>{}</p>", esc(&about.description)));

            let facts = [
                ("Location", &about.facts.location),
                ("Experience", &about.facts.experience),
                ("Education", &about.facts.education),
                ("Interests", &about.facts.interests),
            ];
            let items: String = facts
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("<li><strong>{}:</strong> {}</li>", label, esc(value)))
                .collect();
            if !items.is_empty() {
                html.push_str(&format!("<ul class=\"about-facts\">{items}</ul>"));
            }
            html
        }
    };
    container("about-content", "about-content", &inner)
}

pub fn skills(section: &Fetched<Vec<Skill>>) -> String {
    let inner = match section {
        Err(_) => message("Could not load skills."),
        Ok(skills) => skills
            .iter()
            .map(|skill| {
                let icon = if skill.icon.is_empty() {
                    DEFAULT_SKILL_ICON
                } else {
                    skill.icon.as_str()
                };
                let level = skill
                    .level
                    .map(|l| format!("<span class=\"skill-level\">{l}</span>"))
                    .unwrap_or_default();
                format!(
                    "<div class=\"skill-card\"><i class=\"{} text-4xl text-purple-600 mb-2\"></i><p class=\"font-semibold\">{}</p>{}</div>",
                    esc(icon),
                    esc(&skill.name),
                    level
                )
            })
            .collect(),
    };
    container("skills-grid", "skills-grid", &inner)
}

pub fn project_card(project: &Project, description_chars: usize) -> String {
    let image = if project.data.image_url.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        project.data.image_url.as_str()
    };
    format!(
        "<a href=\"/projects/{}\" class=\"project-card\"><img src=\"{}\" alt=\"{}\" class=\"w-full h-48 object-cover\"><div class=\"p-6\"><h3 class=\"text-xl font-bold mb-2\">{}</h3><p class=\"text-gray-600 text-sm\">{}</p></div></a>",
        esc(&project.id),
        esc(image),
        esc(&project.data.title),
        esc(&project.data.title),
        esc(&preview(&project.data.description, description_chars))
    )
}

pub fn projects(section: &Fetched<Vec<Project>>) -> String {
    let inner = match section {
        Err(_) => message("Error loading projects. Please try again later."),
        Ok(projects) => projects.iter().map(|p| project_card(p, 100)).collect(),
    };
    container("projects-grid", "projects-grid", &inner)
}

fn optional_paragraph(text: &Option<String>) -> String {
    text.as_deref()
        .map(|t| format!("<p class=\"timeline-description\">{}</p>", esc(t)))
        .unwrap_or_default()
}

pub fn experience(section: &Fetched<Vec<TimelineItem<Experience>>>) -> String {
    let inner = match section {
        Err(_) => message("Could not load experience."),
        Ok(items) => items
            .iter()
            .map(|item| {
                let e = &item.entry;
                format!(
                    "<div class=\"timeline-item\"><h3>{}</h3><p class=\"timeline-org\">{}</p><span class=\"timeline-date\">{}</span>{}</div>",
                    esc(&e.position),
                    esc(&e.company),
                    esc(&e.duration),
                    optional_paragraph(&e.description)
                )
            })
            .collect(),
    };
    container("experience-list", "timeline", &inner)
}

pub fn education(section: &Fetched<Vec<TimelineItem<Education>>>) -> String {
    let inner = match section {
        Err(_) => message("Could not load education."),
        Ok(items) => items
            .iter()
            .map(|item| {
                let e = &item.entry;
                format!(
                    "<div class=\"timeline-item\"><h3>{}</h3><p class=\"timeline-org\">{}</p><span class=\"timeline-date\">{}</span>{}</div>",
                    esc(&e.degree),
                    esc(&e.institution),
                    esc(&e.year),
                    optional_paragraph(&e.description)
                )
            })
            .collect(),
    };
    container("education-list", "timeline", &inner)
}

pub fn awards(section: &Fetched<Vec<TimelineItem<Award>>>) -> String {
    let inner = match section {
        Err(_) => message("Could not load awards."),
        Ok(items) => items
            .iter()
            .map(|item| {
                let a = &item.entry;
                let credential = a
                    .credential_url
                    .as_deref()
                    .map(|url| {
                        format!(
                            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">View Credential</a>",
                            esc(url)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    "<div class=\"award-card\"><h3>{}</h3><p class=\"timeline-org\">{}</p><span class=\"timeline-date\">{}</span>{}{}</div>",
                    esc(&a.title),
                    esc(&a.issuer),
                    esc(&a.date),
                    optional_paragraph(&a.description),
                    credential
                )
            })
            .collect(),
    };
    container("awards-list", "awards-grid", &inner)
}

pub fn blog_preview(section: &Fetched<Vec<BlogPost>>) -> String {
    let inner = match section {
        Err(_) => error_message("Error loading blog posts. Please try again later."),
        Ok(posts) if posts.is_empty() => message("No blog posts available yet."),
        Ok(posts) => posts.iter().take(BLOG_PREVIEW_COUNT).map(post_card).collect(),
    };
    container("blog-preview", "blog-grid", &inner)
}

pub fn contact_info(section: &Fetched<Option<Contact>>) -> String {
    let inner = match section {
        Err(_) => message("Could not load contact information."),
        Ok(None) => message("Contact details are not available yet."),
        Ok(Some(contact)) => {
            let mut html = format!(
                "<p><i class=\"fas fa-envelope\"></i> <a href=\"mailto:{0}\">{0}</a></p>",
                esc(&contact.email)
            );
            if !contact.phone.is_empty() {
                html.push_str(&format!(
                    "<p><i class=\"fas fa-phone\"></i> <a href=\"tel:{0}\">{0}</a></p>",
                    esc(&contact.phone)
                ));
            }
            if !contact.location.is_empty() {
                html.push_str(&format!(
                    "<p><i class=\"fas fa-map-marker-alt\"></i> {}</p>",
                    esc(&contact.location)
                ));
            }
            html.push_str(&format!(
                "<div class=\"social-links\">{}</div>",
                social_links(&contact.social_links)
            ));
            html
        }
    };
    container("contact-info", "contact-info", &inner)
}

pub fn contact_form(notice: Option<&ContactNotice>) -> String {
    format!(
        r#"<form class="contact-form" method="post" action="/contact">{}
<input type="text" name="name" placeholder="Your Name" required>
<input type="email" name="email" placeholder="Your Email" required>
<input type="text" name="subject" placeholder="Subject">
<textarea name="message" rows="5" placeholder="Your Message" required></textarea>
<button type="submit" class="btn">Send Message</button>
</form>"#,
        notice.map(ContactNotice::render).unwrap_or_default()
    )
}
