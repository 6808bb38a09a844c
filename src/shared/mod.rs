pub mod api;
pub mod pagination;
pub mod patch;
pub mod slug;
