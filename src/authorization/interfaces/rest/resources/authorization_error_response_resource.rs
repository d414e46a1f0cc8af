use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuthorizationErrorResponseResource {
    pub code: String,
    pub message: String,
}
