use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiError;

/// Documentation shape of `ApiResponse::success`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Documentation shape of every error reply.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}
