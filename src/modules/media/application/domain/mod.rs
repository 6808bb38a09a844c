pub mod entities;
pub mod policies;
pub mod staged_image;
