mod delete_image;
mod upload_image;
mod validate_image;

pub use delete_image::delete_image_handler;
pub use upload_image::{upload_image_handler, UploadImageRequestDto};
pub use validate_image::{validate_image_handler, ValidateImageRequestDto};
pub use upload_image::__path_upload_image_handler;
pub use validate_image::__path_validate_image_handler;
pub use delete_image::__path_delete_image_handler;
