//! OpenAPI mirrors of the `ApiResponse` envelope.

use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// The skill, project, post, section or list the route returns
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code the dashboard switches on, e.g. `PROJECT_NOT_FOUND`
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Shown to the admin as is
    #[schema(example = "Title and content are required")]
    pub message: String,
}
