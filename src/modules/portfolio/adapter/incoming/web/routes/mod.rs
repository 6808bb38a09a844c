mod get_portfolio;
mod get_section;
mod initialize_portfolio;
mod update_section;

pub use get_portfolio::get_portfolio_handler;
pub use get_section::get_section_handler;
pub use initialize_portfolio::{initialize_portfolio_handler, InitializeQuery, InitializeResponse};
pub use update_section::update_section_handler;
pub use update_section::__path_update_section_handler;
