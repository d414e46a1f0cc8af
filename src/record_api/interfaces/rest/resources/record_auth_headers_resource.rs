use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecordAuthHeadersResource {
    pub x_user_id: String,
    pub x_user_role: Option<String>,
    pub x_request_id: Option<String>,
}
