mod content_store_memory;
mod content_store_postgres;
pub mod sea_orm_entity;

pub use content_store_memory::ContentStoreMemory;
pub use content_store_postgres::ContentStorePostgres;
