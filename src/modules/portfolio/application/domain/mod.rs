pub mod defaults;
pub mod portfolio;
pub mod section;
