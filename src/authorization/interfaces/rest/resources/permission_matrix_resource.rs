use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PermissionMatrixResource {
    pub version: u32,
    pub loaded_at: String,
    pub roles: Vec<MatrixRoleResource>,
    pub resources: BTreeMap<String, MatrixResourceRulesResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MatrixRoleResource {
    pub name: String,
    pub priority: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MatrixResourceRulesResource {
    pub operations: BTreeMap<String, MatrixOperationRuleResource>,
    pub row_security: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MatrixOperationRuleResource {
    pub minimum_role: String,
    pub minimum_priority: i32,
}
