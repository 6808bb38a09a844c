use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::application::domain::portfolio::{Project, PortfolioDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewSource {
    Store,
    Defaults,
}

/// Portfolio content as the public site sees it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub source: ViewSource,
    #[serde(flatten)]
    pub portfolio: PortfolioDocument,
}

/// Case-insensitive tag filter; `None`, blank and `all` match everything.
pub fn filter_by_tag(projects: Vec<Project>, tag: Option<&str>) -> Vec<Project> {
    let wanted = match tag.map(str::trim) {
        None | Some("") => return projects,
        Some(t) if t.eq_ignore_ascii_case("all") => return projects,
        Some(t) => t.to_lowercase(),
    };

    projects
        .into_iter()
        .filter(|p| p.tags.iter().any(|t| t.to_lowercase() == wanted))
        .collect()
}

/// Distinct tags across projects, first spelling wins, in first-seen order.
pub fn tag_cloud(projects: &[Project]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.tags.iter())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect()
}
