pub mod adapter;
pub mod application;

pub use adapter::outgoing::{ContentStoreMemory, ContentStorePostgres};
pub use application::domain::store_path::StorePath;
pub use application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError, SharedContentStore,
};
