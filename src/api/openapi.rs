use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiError;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::article::application::domain::article::{Article, CreateArticleData, Visibility};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody, SessionResponse,
};
use crate::contact::adapter::incoming::web::routes::ContactSentResponse;
use crate::contact::application::domain::contact_message::ContactForm;
use crate::media::adapter::incoming::web::routes::{
    UploadImageRequestDto, ValidateImageRequestDto,
};
use crate::media::application::domain::entities::{ImageValidation, UploadedImage};
use crate::portfolio::application::domain::portfolio::{
    Achievement, Activity, Certification, Education, Experience, PersonalInfo, PortfolioDocument,
    Project, SkillCategory, Skills, Socials,
};
use crate::site::application::domain::dashboard::{ArticleCounts, DashboardSummary};
use crate::site::application::domain::layout::{LayoutSection, SiteLayout};
use crate::site::application::domain::theme::{
    CardStyle, Palette, SiteSection, ThemeDescriptor, ThemeName,
};
use crate::site::application::domain::view::{PortfolioView, ViewSource};
use crate::site::application::ports::incoming::use_cases::ProjectGrid;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio site and admin dashboard backend",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,
        crate::auth::adapter::incoming::web::routes::dashboard_handler,

        // Articles
        crate::article::adapter::incoming::web::routes::get_public_articles_handler,
        crate::article::adapter::incoming::web::routes::get_article_by_slug_handler,
        crate::article::adapter::incoming::web::routes::create_article_handler,

        // Portfolio
        crate::portfolio::adapter::incoming::web::routes::update_section_handler,

        // Site
        crate::site::adapter::incoming::web::routes::get_portfolio_view_handler,
        crate::site::adapter::incoming::web::routes::get_project_grid_handler,
        crate::site::adapter::incoming::web::routes::get_site_layout_handler,

        // Media
        crate::media::adapter::incoming::web::routes::upload_image_handler,
        crate::media::adapter::incoming::web::routes::validate_image_handler,
        crate::media::adapter::incoming::web::routes::delete_image_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::send_contact_message_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ApiError,

            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,
            SessionResponse,

            Article,
            CreateArticleData,
            Visibility,

            PortfolioDocument,
            PersonalInfo,
            Socials,
            Experience,
            Project,
            Education,
            Certification,
            Achievement,
            Activity,
            Skills,
            SkillCategory,

            PortfolioView,
            ViewSource,
            ProjectGrid,
            SiteLayout,
            LayoutSection,
            ThemeDescriptor,
            ThemeName,
            SiteSection,
            CardStyle,
            Palette,
            DashboardSummary,
            ArticleCounts,

            UploadImageRequestDto,
            ValidateImageRequestDto,
            UploadedImage,
            ImageValidation,

            ContactForm,
            ContactSentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session"),
        (name = "articles", description = "Blog articles"),
        (name = "portfolio", description = "Portfolio sections (admin)"),
        (name = "site", description = "Public presentation data"),
        (name = "media", description = "Image hosting"),
        (name = "contact", description = "Visitor contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
