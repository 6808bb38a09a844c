pub mod cloudinary_image_host;

pub use cloudinary_image_host::{CloudinaryConfig, CloudinaryImageHost};
