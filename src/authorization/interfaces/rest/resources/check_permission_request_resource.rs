use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CheckPermissionRequestResource {
    pub role: Option<String>,
    #[validate(length(min = 1))]
    pub resource: String,
    #[validate(length(min = 1))]
    pub operation: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CheckPermissionResponseResource {
    pub allowed: bool,
    pub denial_reason: Option<String>,
    pub minimum_role: Option<String>,
    pub minimum_priority: Option<i32>,
}
