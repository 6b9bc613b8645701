pub mod modules;
pub use modules::auth;
pub use modules::blog;
pub use modules::message;
pub use modules::project;
pub use modules::section;
pub use modules::site;
pub use modules::skill;
pub use modules::store;
pub use modules::timeline;

mod api;
mod config;
pub mod health;
mod shared;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    AdminQueryPostgres, AdminRepositoryPostgres, RedisTokenRepository,
};
use crate::auth::application::ports::incoming::use_cases::{
    SeedAdminCommand, SeedAdminUseCase, SeedOutcome,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    FetchSessionService, LoginAdminService, LogoutAdminService, RefreshTokenService,
    SeedAdminService,
};
use crate::auth::application::AuthUseCases;
use crate::blog::application::BlogUseCases;
use crate::config::{AdminSeed, AppConfig, Argon2Settings};
use crate::message::application::MessageUseCases;
use crate::project::application::ProjectUseCases;
use crate::section::application::Sections;
use crate::shared::api::custom_json_config;
use crate::site::application::SiteSettings;
use crate::skill::application::SkillUseCases;
use crate::store::adapter::outgoing::DocumentStorePostgres;
use crate::store::application::ports::outgoing::DocumentStore;
use crate::timeline::application::Timelines;

#[cfg(test)]
mod tests;

/// Use-case handles shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub sections: Sections,
    pub skill: SkillUseCases,
    pub project: ProjectUseCases,
    pub timeline: Timelines,
    pub blog: BlogUseCases,
    pub message: MessageUseCases,
    pub site: SiteSettings,
}

impl AppState {
    /// Content modules all read and write through `store`.
    pub fn new(auth: AuthUseCases, store: Arc<dyn DocumentStore>, site: SiteSettings) -> Self {
        Self {
            auth,
            sections: Sections::with_store(Arc::clone(&store)),
            skill: SkillUseCases::with_store(Arc::clone(&store)),
            project: ProjectUseCases::with_store(Arc::clone(&store)),
            timeline: Timelines::with_store(Arc::clone(&store)),
            blog: BlogUseCases::with_store(Arc::clone(&store)),
            message: MessageUseCases::with_store(store),
            site,
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
fn password_hasher(settings: Option<Argon2Settings>) -> anyhow::Result<Arc<dyn PasswordHasher>> {
    Ok(match settings {
        Some(p) => Arc::new(
            Argon2Hasher::with_params(p.memory_kib, p.iterations, p.parallelism)
                .map_err(|e| anyhow::anyhow!("Invalid ARGON2_* settings: {e}"))?,
        ),
        None => Arc::new(Argon2Hasher::default()),
    })
}

async fn seed_admin(
    seed: &AdminSeed,
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
) -> anyhow::Result<()> {
    let command = SeedAdminCommand::new(
        seed.email.clone(),
        seed.password.clone(),
        seed.display_name.clone(),
    )
    .context("Invalid ADMIN_EMAIL / ADMIN_PASSWORD")?;

    let service = SeedAdminService::new(
        AdminQueryPostgres::new(Arc::clone(db)),
        AdminRepositoryPostgres::new(Arc::clone(db)),
        hasher,
    );

    match service.execute(command).await.context("Failed to seed admin")? {
        SeedOutcome::Created(admin) => info!(admin_id = %admin.id, "Admin account created"),
        SeedOutcome::AlreadyExists => info!("Admin account already exists"),
    }
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let db_arc = Arc::new(connect_database(&config.database_url).await?);

    if config.run_migrations {
        Migrator::up(db_arc.as_ref(), None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    // Redis connection
    let redis_pool = RedisConfig::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    let hasher = password_hasher(config.argon2)?;

    match &config.admin_seed {
        Some(seed) => seed_admin(seed, &db_arc, Arc::clone(&hasher)).await?,
        None => warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set; skipping admin seeding"),
    }

    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let token_provider: Arc<dyn TokenProvider> = jwt_service.clone();
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminService::new(
            AdminQueryPostgres::new(Arc::clone(&db_arc)),
            hasher,
            Arc::clone(&token_provider),
        )),
        refresh: Arc::new(RefreshTokenService::new(
            token_repo.clone(),
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutAdminService::new(token_repo, token_provider)),
        session: Arc::new(FetchSessionService::new(AdminQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    let store: Arc<dyn DocumentStore> = Arc::new(DocumentStorePostgres::new(Arc::clone(&db_arc)));
    let state = AppState::new(auth, store, SiteSettings::new(config.site_title.clone()));

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let openapi = ApiDoc::openapi();

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::blog::adapter::incoming::web::routes as blog_routes;
    use crate::message::adapter::incoming::web::routes as message_routes;
    use crate::project::adapter::incoming::web::routes as project_routes;
    use crate::site::adapter::incoming::web::routes as site_routes;
    use crate::skill::adapter::incoming::web::routes as skill_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::logout_admin_handler);
    cfg.service(auth_routes::fetch_session_handler);
    // Sections and timelines
    cfg.configure(crate::section::adapter::incoming::web::routes::configure);
    cfg.configure(crate::timeline::adapter::incoming::web::routes::configure);
    // Skills
    cfg.service(skill_routes::list_skills_handler);
    cfg.service(skill_routes::create_skill_handler);
    cfg.service(skill_routes::delete_skill_handler);
    // Projects
    cfg.service(project_routes::list_projects_handler);
    cfg.service(project_routes::related_projects_handler);
    cfg.service(project_routes::get_project_handler);
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::update_project_handler);
    cfg.service(project_routes::delete_project_handler);
    // Blog
    cfg.service(blog_routes::list_posts_handler);
    cfg.service(blog_routes::get_post_handler);
    cfg.service(blog_routes::publish_post_handler);
    cfg.service(blog_routes::update_post_handler);
    cfg.service(blog_routes::delete_post_handler);
    // Messages
    cfg.service(message_routes::submit_message_handler);
    cfg.service(message_routes::list_messages_handler);
    cfg.service(message_routes::delete_message_handler);
    // Public pages
    cfg.service(site_routes::home_page_handler);
    cfg.service(site_routes::contact_form_handler);
    cfg.service(site_routes::project_page_handler);
    cfg.service(site_routes::blog_list_page_handler);
    cfg.service(site_routes::blog_post_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
