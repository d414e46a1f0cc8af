use crate::authorization::domain::model::{
    entities::permission_matrix::RoleDefinition, enums::operation_kind::OperationKind,
};

#[derive(Clone, Debug)]
pub struct PermissionDecision {
    pub allowed: bool,
    pub denial_reason: Option<String>,
    pub minimum_required: Option<RoleDefinition>,
}

impl PermissionDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            denial_reason: None,
            minimum_required: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            denial_reason: Some(reason.into()),
            minimum_required: None,
        }
    }

    pub fn deny_below_minimum(reason: impl Into<String>, minimum_required: RoleDefinition) -> Self {
        Self {
            allowed: false,
            denial_reason: Some(reason.into()),
            minimum_required: Some(minimum_required),
        }
    }
}

/// Total over its inputs: absent, empty, and unknown roles resolve to deny,
/// as do resources missing from the matrix. Never panics.
pub trait PermissionEvaluator: Send + Sync {
    fn has_permission(&self, role: Option<&str>, resource: &str, operation: OperationKind)
    -> bool;

    fn check_permission(
        &self,
        role: Option<&str>,
        resource: &str,
        operation: OperationKind,
    ) -> PermissionDecision;

    fn allowed_operations(&self, role: Option<&str>, resource: &str) -> Vec<OperationKind>;

    fn can_access_resource(&self, role: Option<&str>, resource: &str) -> bool;

    fn minimum_role(&self, resource: &str, operation: OperationKind) -> Option<RoleDefinition>;

    fn has_minimum_role(&self, role: Option<&str>, required_role: &str) -> bool;
}
