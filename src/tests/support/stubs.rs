use async_trait::async_trait;

use crate::article::application::domain::article::Article;
use crate::article::application::ports::incoming::use_cases::{
    ArticleListFilter, GetArticlesError, GetArticlesUseCase,
};
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminError, LoginAdminRequest,
};
use crate::contact::application::domain::contact_message::ContactForm;
use crate::contact::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::media::application::domain::staged_image::is_data_url;
use crate::media::application::ports::incoming::use_cases::{
    CommitImageError, CommitStagedImageUseCase, DeleteImageError, DeleteImageUseCase,
    UploadImageError, UploadImageUseCase,
};
use crate::media::application::ports::outgoing::image_host::ProgressSink;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::site::application::domain::dashboard::{ArticleCounts, DashboardSummary};
use crate::site::application::ports::incoming::use_cases::{
    GetDashboardSummaryUseCase, SiteError,
};

// =====================================================
// Auth
// =====================================================

#[derive(Default, Clone)]
pub struct StubLoginAdmin;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdmin {
    async fn execute(&self, _request: LoginAdminRequest) -> Result<AdminSession, LoginAdminError> {
        unimplemented!("not needed for these tests")
    }
}

// =====================================================
// Media
// =====================================================

#[derive(Clone)]
pub struct StubUploadImage {
    result: Result<UploadedImage, UploadImageError>,
}

impl StubUploadImage {
    pub fn hosted(url: &str) -> Self {
        Self {
            result: Ok(UploadedImage {
                url: url.to_string(),
                public_id: "portfolio/test".to_string(),
            }),
        }
    }

    pub fn failing(err: UploadImageError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UploadImageUseCase for StubUploadImage {
    async fn execute(
        &self,
        _file: ImageFile,
        _progress: ProgressSink,
    ) -> Result<UploadedImage, UploadImageError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteImage {
    result: Result<(), DeleteImageError>,
}

impl StubDeleteImage {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing(err: DeleteImageError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteImageUseCase for StubDeleteImage {
    async fn execute(&self, _public_id: &str) -> Result<(), DeleteImageError> {
        self.result.clone()
    }
}

/// Stands in for the CDN: staged data URLs become `https://cdn.test/<stem>.png`.
#[derive(Clone)]
pub struct StubCommitStagedImage {
    error: Option<CommitImageError>,
}

impl StubCommitStagedImage {
    pub fn passthrough() -> Self {
        Self { error: None }
    }

    pub fn failing(err: CommitImageError) -> Self {
        Self { error: Some(err) }
    }
}

#[async_trait]
impl CommitStagedImageUseCase for StubCommitStagedImage {
    async fn execute(&self, value: &str, file_stem: &str) -> Result<String, CommitImageError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(String::new());
        }
        if !is_data_url(value) {
            return Ok(value.to_string());
        }
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(format!("https://cdn.test/{}.png", file_stem)),
        }
    }
}

// =====================================================
// Articles
// =====================================================

#[derive(Clone)]
pub struct StubGetArticles {
    result: Result<Vec<Article>, GetArticlesError>,
}

impl StubGetArticles {
    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetArticlesError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetArticlesUseCase for StubGetArticles {
    async fn execute(
        &self,
        _filter: ArticleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Article>, GetArticlesError> {
        self.result
            .clone()
            .map(|items| crate::shared::pagination::paginate(items, page))
    }
}

// =====================================================
// Contact
// =====================================================

#[derive(Clone)]
pub struct StubSendContactMessage {
    result: Result<(), SendContactMessageError>,
}

impl StubSendContactMessage {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing(err: SendContactMessageError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessage {
    async fn execute(&self, _form: ContactForm) -> Result<(), SendContactMessageError> {
        self.result.clone()
    }
}

// =====================================================
// Site
// =====================================================

#[derive(Clone)]
pub struct StubDashboardSummary {
    summary: DashboardSummary,
}

impl StubDashboardSummary {
    pub fn with_articles(total: usize) -> Self {
        Self {
            summary: DashboardSummary {
                portfolio_initialized: true,
                articles: ArticleCounts {
                    total,
                    public: total,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl GetDashboardSummaryUseCase for StubDashboardSummary {
    async fn execute(&self) -> Result<DashboardSummary, SiteError> {
        Ok(self.summary.clone())
    }
}
