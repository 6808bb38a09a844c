pub mod article;
pub mod filters;
pub mod read_time;
