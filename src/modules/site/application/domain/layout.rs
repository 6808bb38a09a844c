use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::article::application::domain::article::Article;
use crate::shared::pagination::{paginate, PageRequest, PageResult};
use crate::site::application::domain::theme::{SiteSection, ThemeDescriptor};
use crate::site::application::domain::view::{tag_cloud, PortfolioView};

/// Grid page size on the public site.
pub const GRID_PER_PAGE: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LayoutSection {
    pub section: SiteSection,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteLayout {
    pub theme: ThemeDescriptor,
    pub source: crate::site::application::domain::view::ViewSource,
    pub sections: Vec<LayoutSection>,
}

fn first_page<T>(items: Vec<T>) -> PageResult<T> {
    paginate(items, PageRequest::new(1, GRID_PER_PAGE, GRID_PER_PAGE))
}

fn to_json<T: Serialize>(value: T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

impl SiteLayout {
    /// Lays the content out in the theme's section order. Grids start at
    /// their first page.
    pub fn build(
        theme: ThemeDescriptor,
        view: PortfolioView,
        articles: PageResult<Article>,
    ) -> Result<Self, serde_json::Error> {
        let doc = view.portfolio;
        let mut sections = Vec::with_capacity(theme.section_order.len());

        for section in &theme.section_order {
            let data = match section {
                SiteSection::Hero => to_json(&doc.personal_info)?,
                SiteSection::Experience => to_json(&doc.experiences)?,
                SiteSection::Projects => json!({
                    "tags": tag_cloud(&doc.projects),
                    "projects": to_json(first_page(doc.projects.clone()))?,
                }),
                SiteSection::Skills => to_json(&doc.skills)?,
                SiteSection::Education => to_json(&doc.education)?,
                SiteSection::Certifications => to_json(&doc.certifications)?,
                SiteSection::Achievements => to_json(first_page(doc.achievements.clone()))?,
                SiteSection::Activities => to_json(&doc.activities)?,
                SiteSection::Articles => to_json(&articles)?,
                SiteSection::Contact => json!({
                    "email": doc.personal_info.email,
                    "socials": to_json(&doc.personal_info.socials)?,
                }),
            };
            sections.push(LayoutSection {
                section: *section,
                data,
            });
        }

        Ok(Self {
            theme,
            source: view.source,
            sections,
        })
    }
}
