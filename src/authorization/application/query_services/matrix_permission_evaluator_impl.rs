use std::sync::Arc;

use crate::authorization::domain::{
    model::{
        entities::permission_matrix::{PermissionMatrix, RoleDefinition},
        enums::operation_kind::OperationKind,
    },
    services::{
        permission_evaluator::{PermissionDecision, PermissionEvaluator},
        role_hierarchy::RoleHierarchy,
    },
};

pub struct MatrixPermissionEvaluatorImpl {
    matrix: Arc<PermissionMatrix>,
    hierarchy: RoleHierarchy,
}

impl MatrixPermissionEvaluatorImpl {
    pub fn new(matrix: Arc<PermissionMatrix>) -> Self {
        let hierarchy = RoleHierarchy::from_matrix(&matrix);
        Self { matrix, hierarchy }
    }

    pub fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }
}

impl PermissionEvaluator for MatrixPermissionEvaluatorImpl {
    fn has_permission(
        &self,
        role: Option<&str>,
        resource: &str,
        operation: OperationKind,
    ) -> bool {
        self.check_permission(role, resource, operation).allowed
    }

    fn check_permission(
        &self,
        role: Option<&str>,
        resource: &str,
        operation: OperationKind,
    ) -> PermissionDecision {
        let Some(role) = role.map(str::trim).filter(|role| !role.is_empty()) else {
            return PermissionDecision::deny("No role assigned");
        };

        let Some(definition) = self.hierarchy.definition_of(role) else {
            return PermissionDecision::deny(format!("Unknown role: {role}"));
        };

        let Some(rule) = self.matrix.permission_rule(resource, operation) else {
            return PermissionDecision::deny(format!(
                "Resource '{resource}' is not registered in the permission matrix"
            ));
        };

        if definition.priority >= rule.minimum_priority {
            PermissionDecision::allow()
        } else {
            PermissionDecision::deny_below_minimum(
                format!(
                    "Role '{role}' does not have '{}' permission for '{resource}' (requires '{}' or above)",
                    operation.as_str(),
                    rule.minimum_role.name
                ),
                rule.minimum_role.clone(),
            )
        }
    }

    fn allowed_operations(&self, role: Option<&str>, resource: &str) -> Vec<OperationKind> {
        OperationKind::all()
            .iter()
            .copied()
            .filter(|operation| self.has_permission(role, resource, *operation))
            .collect()
    }

    fn can_access_resource(&self, role: Option<&str>, resource: &str) -> bool {
        !self.allowed_operations(role, resource).is_empty()
    }

    fn minimum_role(&self, resource: &str, operation: OperationKind) -> Option<RoleDefinition> {
        self.matrix.minimum_role(resource, operation).cloned()
    }

    fn has_minimum_role(&self, role: Option<&str>, required_role: &str) -> bool {
        self.hierarchy.meets_minimum(role, required_role)
    }
}
