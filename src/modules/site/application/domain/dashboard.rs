use serde::Serialize;
use utoipa::ToSchema;

use crate::article::application::domain::article::{Article, Visibility};
use crate::portfolio::application::domain::portfolio::PortfolioDocument;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleCounts {
    pub total: usize,
    pub public: usize,
    pub draft: usize,
    pub private: usize,
}

impl ArticleCounts {
    pub fn tally(articles: &[Article]) -> Self {
        articles.iter().fold(
            Self {
                total: articles.len(),
                ..Default::default()
            },
            |mut counts, article| {
                match article.visibility {
                    Visibility::Public => counts.public += 1,
                    Visibility::Draft => counts.draft += 1,
                    Visibility::Private => counts.private += 1,
                }
                counts
            },
        )
    }
}

/// Landing view of the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub portfolio_initialized: bool,
    pub articles: ArticleCounts,
    pub experiences: usize,
    pub projects: usize,
    pub education: usize,
    pub certifications: usize,
    pub achievements: usize,
    pub activities: usize,
    pub skill_categories: usize,
}

impl DashboardSummary {
    pub fn new(portfolio: Option<&PortfolioDocument>, articles: &[Article]) -> Self {
        let mut summary = Self {
            portfolio_initialized: portfolio.is_some(),
            articles: ArticleCounts::tally(articles),
            ..Default::default()
        };

        if let Some(doc) = portfolio {
            summary.experiences = doc.experiences.len();
            summary.projects = doc.projects.len();
            summary.education = doc.education.len();
            summary.certifications = doc.certifications.len();
            summary.achievements = doc.achievements.len();
            summary.activities = doc.activities.len();
            summary.skill_categories = doc.skills.categories.len();
        }

        summary
    }
}
