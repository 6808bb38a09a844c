use std::sync::Arc;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSectionUseCase, InitializePortfolioUseCase, UpdateSectionUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub initialize: Arc<dyn InitializePortfolioUseCase + Send + Sync>,
    pub update_section: Arc<dyn UpdateSectionUseCase + Send + Sync>,
    pub get_section: Arc<dyn GetSectionUseCase + Send + Sync>,
}
