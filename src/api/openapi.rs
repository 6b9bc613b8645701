use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginAdminInfo, LoginRequestDto, LoginResponse, LogoutRequestDto, LogoutResponseBody,
    RefreshTokenRequestDto, RefreshTokenResponseBody, SessionResponse,
};

// Content
use crate::blog::application::domain::entities::{BlogPost, BlogPostData};
use crate::blog::application::ports::incoming::use_cases::BlogPostForm;
use crate::message::application::domain::entities::{Message, MessageData};
use crate::message::application::ports::incoming::use_cases::MessageForm;
use crate::project::application::domain::entities::{Project, ProjectData, ProjectStatus};
use crate::project::application::ports::incoming::use_cases::ProjectForm;
use crate::section::application::domain::entities::{About, AboutFacts, Contact, Hero, SocialLink};
use crate::skill::adapter::incoming::web::routes::CreateSkillRequestDto;
use crate::skill::application::domain::entities::{Skill, SkillLevel};
use crate::timeline::application::domain::entities::{Award, Education, Experience};

/// Section (`/api/sections/{hero,about,contact}`) and timeline
/// (`/api/{experience,education,awards}`) routes are generic over their
/// document type and are documented through their schemas only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Admin API for the portfolio content management system",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::fetch_session_handler,

        // Skill endpoints
        crate::skill::adapter::incoming::web::routes::list_skills_handler,
        crate::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::list_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,
        crate::project::adapter::incoming::web::routes::related_projects_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::list_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_post_handler,
        crate::blog::adapter::incoming::web::routes::publish_post_handler,
        crate::blog::adapter::incoming::web::routes::update_post_handler,
        crate::blog::adapter::incoming::web::routes::delete_post_handler,

        // Message endpoints
        crate::message::adapter::incoming::web::routes::submit_message_handler,
        crate::message::adapter::incoming::web::routes::list_messages_handler,
        crate::message::adapter::incoming::web::routes::delete_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LoginAdminInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            LogoutRequestDto,
            LogoutResponseBody,
            SessionResponse,

            // Sections
            Hero,
            About,
            AboutFacts,
            Contact,
            SocialLink,

            // Timelines
            Experience,
            Education,
            Award,

            // Collections
            Skill,
            SkillLevel,
            CreateSkillRequestDto,
            Project,
            ProjectData,
            ProjectStatus,
            ProjectForm,
            BlogPost,
            BlogPostData,
            BlogPostForm,
            Message,
            MessageData,
            MessageForm
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session endpoints"),
        (name = "skills", description = "Skill management endpoints"),
        (name = "projects", description = "Project management endpoints"),
        (name = "blog", description = "Blog post management endpoints"),
        (name = "messages", description = "Contact message endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_paths_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/projects"));
        assert!(doc.paths.paths.contains_key("/api/blog/{id}"));
        assert!(doc.paths.paths.contains_key("/api/messages"));
        assert!(doc.paths.paths.contains_key("/api/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/skills/{id}"));
        assert!(doc.paths.paths.contains_key("/api/projects/{id}/related"));
        assert_eq!(doc.paths.paths.len(), 13);

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("BearerAuth"));
        assert!(components.schemas.contains_key("Hero"));
    }
}
