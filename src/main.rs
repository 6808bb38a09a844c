pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{article, auth, contact, content_store, media, portfolio, site};

use crate::api::openapi::ApiDoc;
use crate::article::adapter::outgoing::ArticleRepositoryStore;
use crate::article::application::article_use_cases::ArticleUseCases;
use crate::article::application::ports::incoming::use_cases::GetArticlesUseCase;
use crate::article::application::service::{
    CreateArticleService, DeleteArticleService, GetArticleService, GetArticlesService,
    UpdateArticleService,
};
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    FirebaseIdentityProvider, LocalAccount, LocalIdentityProvider,
};
use crate::auth::application::ports::outgoing::{
    IdentityProvider, PasswordHasher, TokenProvider,
};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::config::{AdminConfig, AppConfig, ContactConfig, ContentStoreConfig, IdentityConfig};
use crate::contact::adapter::outgoing::{EmailJsContactMailer, SmtpContactMailer};
use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::contact::application::service::SendContactMessageService;
use crate::content_store::{ContentStoreMemory, ContentStorePostgres, SharedContentStore};
use crate::media::adapter::outgoing::CloudinaryImageHost;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::ports::incoming::use_cases::CommitStagedImageUseCase;
use crate::media::application::service::{
    CommitStagedImageService, DeleteImageService, UploadImageService,
};
use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::portfolio::application::service::{
    GetPortfolioService, GetSectionService, InitializePortfolioService, UpdateSectionService,
};
use crate::shared::api::custom_json_config;
use crate::site::application::ports::incoming::use_cases::GetPortfolioViewUseCase;
use crate::site::application::service::{
    AchievementsService, DashboardSummaryService, PortfolioViewService, ProjectGridService,
    SiteLayoutService,
};
use crate::site::application::site_use_cases::SiteUseCases;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    /// `Secure` attribute on the admin session cookie.
    pub cookie_secure: bool,
    pub media: MediaUseCases,
    pub article: ArticleUseCases,
    pub portfolio: PortfolioUseCases,
    pub site: SiteUseCases,
    pub contact: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = config::load_dotenv();
    info!(env = %env_name, "Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server.bind_address();

    let store = connect_store(&config.store).await?;
    let http = reqwest::Client::new();

    // Media
    let image_host = CloudinaryImageHost::new(config.cloudinary.clone(), http.clone());
    let images: Arc<dyn CommitStagedImageUseCase + Send + Sync> = Arc::new(
        CommitStagedImageService::new(image_host.clone(), config.upload_policy),
    );
    let media = MediaUseCases {
        upload: Arc::new(UploadImageService::new(image_host.clone(), config.upload_policy)),
        commit_staged: images.clone(),
        delete: Arc::new(DeleteImageService::new(image_host)),
        policy: config.upload_policy,
    };

    // Articles
    let article_repo = ArticleRepositoryStore::new(store.clone());
    let list_articles: Arc<dyn GetArticlesUseCase + Send + Sync> =
        Arc::new(GetArticlesService::new(article_repo.clone()));
    let article = ArticleUseCases {
        create: Arc::new(CreateArticleService::new(
            article_repo.clone(),
            images.clone(),
            config.site.author.clone(),
        )),
        list: list_articles.clone(),
        get: Arc::new(GetArticleService::new(article_repo.clone())),
        update: Arc::new(UpdateArticleService::new(article_repo.clone(), images.clone())),
        delete: Arc::new(DeleteArticleService::new(article_repo.clone())),
    };

    // Portfolio
    let portfolio_repo = PortfolioRepositoryStore::new(store.clone());
    let get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync> =
        Arc::new(GetPortfolioService::new(portfolio_repo.clone()));
    let portfolio = PortfolioUseCases {
        get: get_portfolio.clone(),
        initialize: Arc::new(InitializePortfolioService::new(portfolio_repo.clone())),
        update_section: Arc::new(UpdateSectionService::new(portfolio_repo.clone(), images)),
        get_section: Arc::new(GetSectionService::new(portfolio_repo)),
    };

    // Site
    let view: Arc<dyn GetPortfolioViewUseCase + Send + Sync> =
        Arc::new(PortfolioViewService::new(get_portfolio.clone()));
    let site = SiteUseCases {
        portfolio_view: view.clone(),
        project_grid: Arc::new(ProjectGridService::new(view.clone())),
        achievements: Arc::new(AchievementsService::new(view.clone())),
        layout: Arc::new(SiteLayoutService::new(view, list_articles)),
        dashboard_summary: Arc::new(DashboardSummaryService::new(get_portfolio, article_repo)),
    };

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let identity = identity_provider(&config.admin, http.clone());
    let login_admin = LoginAdminUseCase::new(
        identity,
        Arc::clone(&token_provider_arc),
        config.admin.email.clone(),
    );

    // Contact
    let contact = contact_use_case(&config.contact, http)?;

    let state = AppState {
        login_admin: Arc::new(login_admin),
        cookie_secure: config.server.cookie_secure,
        media,
        article,
        portfolio,
        site,
        contact,
    };

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server error")
}

#[cfg(not(tarpaulin_include))]
async fn connect_store(config: &ContentStoreConfig) -> anyhow::Result<SharedContentStore> {
    match config {
        ContentStoreConfig::Memory => {
            warn!("Using in-memory content store; data is lost on restart");
            Ok(Arc::new(ContentStoreMemory::new()))
        }
        ContentStoreConfig::Postgres {
            url,
            max_connections,
        } => {
            let mut opt = ConnectOptions::new(url.clone());
            opt.max_connections(*max_connections)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .context("Failed to connect to database")?;

            Migrator::up(&conn, None)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(ContentStorePostgres::new(Arc::new(conn))))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn identity_provider(
    admin: &AdminConfig,
    http: reqwest::Client,
) -> Arc<dyn IdentityProvider + Send + Sync> {
    match &admin.identity {
        IdentityConfig::Firebase { api_key } => {
            Arc::new(FirebaseIdentityProvider::new(api_key.clone(), http))
        }
        IdentityConfig::Local { password_hash } => {
            let hasher: Arc<dyn PasswordHasher + Send + Sync> =
                Arc::new(Argon2Hasher::from_env());
            Arc::new(LocalIdentityProvider::new(
                vec![LocalAccount {
                    email: admin.email.clone(),
                    password_hash: password_hash.clone(),
                }],
                hasher,
            ))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn contact_use_case(
    config: &ContactConfig,
    http: reqwest::Client,
) -> anyhow::Result<Arc<dyn SendContactMessageUseCase + Send + Sync>> {
    Ok(match config {
        ContactConfig::EmailJs(emailjs) => Arc::new(SendContactMessageService::new(
            EmailJsContactMailer::new(emailjs.clone(), http),
        )),
        ContactConfig::Smtp(smtp) => {
            let mailer =
                SmtpContactMailer::from_config(smtp).context("Invalid SMTP configuration")?;
            Arc::new(SendContactMessageService::new(mailer))
        }
    })
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::dashboard_handler);
    // Public site
    cfg.service(crate::site::adapter::incoming::web::routes::get_portfolio_view_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_project_grid_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_achievements_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_themes_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_site_layout_handler);
    // Articles
    cfg.service(crate::article::adapter::incoming::web::routes::get_public_articles_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::get_featured_articles_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::get_article_by_slug_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::get_articles_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::get_article_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::create_article_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::update_article_handler);
    cfg.service(crate::article::adapter::incoming::web::routes::delete_article_handler);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::initialize_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_section_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_section_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_image_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::validate_image_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::delete_image_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::send_contact_message_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

/// `portfolio_cms hash-password <password>` prints an argon2 hash for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
fn hash_password_command(password: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let hash = runtime
        .block_on(Argon2Hasher::from_env().hash_password(password))
        .context("Failed to hash password")?;

    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("hash-password") => match args.get(2) {
            Some(password) => hash_password_command(password),
            None => Err(anyhow::anyhow!("usage: portfolio_cms hash-password <password>")),
        },
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
