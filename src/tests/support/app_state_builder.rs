use actix_web::web;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::article::adapter::outgoing::ArticleRepositoryStore;
use crate::article::application::article_use_cases::ArticleUseCases;
use crate::article::application::ports::incoming::use_cases::GetArticlesUseCase;
use crate::article::application::service::{
    CreateArticleService, DeleteArticleService, GetArticleService, GetArticlesService,
    UpdateArticleService,
};
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::content_store::{ContentStoreMemory, SharedContentStore};
use crate::media::application::domain::policies::upload_policy::ImageUploadPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::ports::incoming::use_cases::{
    CommitStagedImageUseCase, DeleteImageUseCase, UploadImageUseCase,
};
use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::portfolio::application::service::{
    GetPortfolioService, GetSectionService, InitializePortfolioService, UpdateSectionService,
};
use crate::site::application::ports::incoming::use_cases::{
    GetDashboardSummaryUseCase, GetPortfolioViewUseCase,
};
use crate::site::application::service::{
    AchievementsService, DashboardSummaryService, PortfolioViewService, ProjectGridService,
    SiteLayoutService,
};
use crate::site::application::site_use_cases::SiteUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub const TEST_AUTHOR: &str = "Test Author";

/// Article, portfolio and site use cases are the real services over an
/// in-memory store seeded through `with_*_data`. Everything that leaves the
/// process is stubbed.
pub struct TestAppStateBuilder {
    store_data: Map<String, Value>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    cookie_secure: bool,
    upload_image: Arc<dyn UploadImageUseCase + Send + Sync>,
    delete_image: Arc<dyn DeleteImageUseCase + Send + Sync>,
    image_policy: ImageUploadPolicy,
    list_articles: Option<Arc<dyn GetArticlesUseCase + Send + Sync>>,
    dashboard_summary: Option<Arc<dyn GetDashboardSummaryUseCase + Send + Sync>>,
    contact: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store_data: Map::new(),
            login_admin: Arc::new(StubLoginAdmin),
            cookie_secure: false,
            upload_image: Arc::new(StubUploadImage::hosted("https://cdn.test/default.png")),
            delete_image: Arc::new(StubDeleteImage::ok()),
            image_policy: ImageUploadPolicy::new(5),
            list_articles: None,
            dashboard_summary: None,
            contact: Arc::new(StubSendContactMessage::ok()),
        }
    }
}

impl TestAppStateBuilder {
    fn seed(mut self, data: Value) -> Self {
        if let Value::Object(roots) = data {
            self.store_data.extend(roots);
        }
        self
    }

    /// Seeds store roots, e.g. `{"articles": {...}}`.
    pub fn with_article_data(self, data: Value) -> Self {
        self.seed(data)
    }

    /// Seeds store roots, e.g. `{"portfolio": {...}}`.
    pub fn with_portfolio_data(self, data: Value) -> Self {
        self.seed(data)
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn with_upload_image(mut self, uc: impl UploadImageUseCase + Send + Sync + 'static) -> Self {
        self.upload_image = Arc::new(uc);
        self
    }

    pub fn with_delete_image(mut self, uc: impl DeleteImageUseCase + Send + Sync + 'static) -> Self {
        self.delete_image = Arc::new(uc);
        self
    }

    pub fn with_image_policy(mut self, policy: ImageUploadPolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn with_list_articles(
        mut self,
        uc: impl GetArticlesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_articles = Some(Arc::new(uc));
        self
    }

    pub fn with_dashboard_summary(
        mut self,
        uc: impl GetDashboardSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.dashboard_summary = Some(Arc::new(uc));
        self
    }

    pub fn with_contact(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store: SharedContentStore =
            Arc::new(ContentStoreMemory::with_data(Value::Object(self.store_data)));
        let images: Arc<dyn CommitStagedImageUseCase + Send + Sync> =
            Arc::new(StubCommitStagedImage::passthrough());

        let article_repo = ArticleRepositoryStore::new(store.clone());
        let portfolio_repo = PortfolioRepositoryStore::new(store);

        let list_articles: Arc<dyn GetArticlesUseCase + Send + Sync> = match self.list_articles {
            Some(uc) => uc,
            None => Arc::new(GetArticlesService::new(article_repo.clone())),
        };

        let article = ArticleUseCases {
            create: Arc::new(CreateArticleService::new(
                article_repo.clone(),
                images.clone(),
                TEST_AUTHOR,
            )),
            list: list_articles.clone(),
            get: Arc::new(GetArticleService::new(article_repo.clone())),
            update: Arc::new(UpdateArticleService::new(article_repo.clone(), images.clone())),
            delete: Arc::new(DeleteArticleService::new(article_repo.clone())),
        };

        let get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync> =
            Arc::new(GetPortfolioService::new(portfolio_repo.clone()));

        let portfolio = PortfolioUseCases {
            get: get_portfolio.clone(),
            initialize: Arc::new(InitializePortfolioService::new(portfolio_repo.clone())),
            update_section: Arc::new(UpdateSectionService::new(
                portfolio_repo.clone(),
                images.clone(),
            )),
            get_section: Arc::new(GetSectionService::new(portfolio_repo)),
        };

        let view: Arc<dyn GetPortfolioViewUseCase + Send + Sync> =
            Arc::new(PortfolioViewService::new(get_portfolio.clone()));

        let dashboard_summary: Arc<dyn GetDashboardSummaryUseCase + Send + Sync> =
            match self.dashboard_summary {
                Some(uc) => uc,
                None => Arc::new(DashboardSummaryService::new(
                    get_portfolio.clone(),
                    article_repo,
                )),
            };

        let site = SiteUseCases {
            portfolio_view: view.clone(),
            project_grid: Arc::new(ProjectGridService::new(view.clone())),
            achievements: Arc::new(AchievementsService::new(view.clone())),
            layout: Arc::new(SiteLayoutService::new(view, list_articles)),
            dashboard_summary,
        };

        web::Data::new(AppState {
            login_admin: self.login_admin,
            cookie_secure: self.cookie_secure,
            media: MediaUseCases {
                upload: self.upload_image,
                commit_staged: images,
                delete: self.delete_image,
                policy: self.image_policy,
            },
            article,
            portfolio,
            site,
            contact: self.contact,
        })
    }
}
