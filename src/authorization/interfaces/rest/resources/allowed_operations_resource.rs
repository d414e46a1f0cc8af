use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
pub struct AllowedOperationsQueryResource {
    pub role: Option<String>,
    #[validate(length(min = 1))]
    pub resource: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AllowedOperationsResponseResource {
    pub resource: String,
    pub role: Option<String>,
    pub operations: Vec<String>,
    pub can_access: bool,
}
