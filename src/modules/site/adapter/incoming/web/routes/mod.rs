mod get_achievements;
mod get_portfolio_view;
mod get_project_grid;
mod get_site_layout;
mod get_themes;

pub use get_achievements::get_achievements_handler;
pub use get_portfolio_view::get_portfolio_view_handler;
pub use get_project_grid::{get_project_grid_handler, ProjectGridQuery};
pub use get_site_layout::{get_site_layout_handler, LayoutQuery};
pub use get_themes::get_themes_handler;
pub use get_portfolio_view::__path_get_portfolio_view_handler;
pub use get_project_grid::__path_get_project_grid_handler;
pub use get_site_layout::__path_get_site_layout_handler;
