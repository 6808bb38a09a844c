pub mod article;
pub mod auth;
pub mod contact;
pub mod content_store;
pub mod media;
pub mod portfolio;
pub mod site;
