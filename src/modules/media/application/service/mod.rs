mod commit_staged_image_service;
mod delete_image_service;
mod upload_image_service;

pub use commit_staged_image_service::CommitStagedImageService;
pub use delete_image_service::DeleteImageService;
pub use upload_image_service::UploadImageService;
