use crate::portfolio::application::domain::portfolio::PortfolioDocument;

const DEFAULT_PORTFOLIO: &str = include_str!("../../../../../assets/default_portfolio.json");

/// Content bundled with the binary, used to seed the store and as the
/// public fallback before anything has been saved.
pub fn default_portfolio() -> Result<PortfolioDocument, serde_json::Error> {
    serde_json::from_str(DEFAULT_PORTFOLIO)
}
