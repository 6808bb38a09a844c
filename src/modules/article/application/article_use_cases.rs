use std::sync::Arc;

use crate::article::application::ports::incoming::use_cases::{
    CreateArticleUseCase, DeleteArticleUseCase, GetArticleUseCase, GetArticlesUseCase,
    UpdateArticleUseCase,
};

#[derive(Clone)]
pub struct ArticleUseCases {
    pub create: Arc<dyn CreateArticleUseCase + Send + Sync>,
    pub list: Arc<dyn GetArticlesUseCase + Send + Sync>,
    pub get: Arc<dyn GetArticleUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateArticleUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteArticleUseCase + Send + Sync>,
}
