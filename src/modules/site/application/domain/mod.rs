pub mod dashboard;
pub mod layout;
pub mod theme;
pub mod view;
