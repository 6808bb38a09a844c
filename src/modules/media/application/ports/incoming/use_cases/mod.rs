mod commit_staged_image;
mod delete_image;
mod upload_image;

pub use commit_staged_image::{CommitImageError, CommitStagedImageUseCase};
pub use delete_image::{DeleteImageError, DeleteImageUseCase};
pub use upload_image::{UploadImageError, UploadImageUseCase};
