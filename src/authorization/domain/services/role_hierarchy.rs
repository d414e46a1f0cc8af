use std::collections::HashMap;

use crate::authorization::domain::model::{
    entities::permission_matrix::{PermissionMatrix, RoleDefinition},
    enums::authorization_domain_error::AuthorizationDomainError,
};

#[derive(Clone, Debug)]
pub struct RoleHierarchy {
    definitions: HashMap<String, RoleDefinition>,
}

impl RoleHierarchy {
    pub fn from_matrix(matrix: &PermissionMatrix) -> Self {
        let definitions = matrix
            .roles()
            .iter()
            .map(|role| (role.name.trim().to_lowercase(), role.clone()))
            .collect();
        Self { definitions }
    }

    pub fn definition_of(&self, role: &str) -> Option<&RoleDefinition> {
        self.definitions.get(&role.trim().to_lowercase())
    }

    pub fn priority_of(&self, role: &str) -> Result<i32, AuthorizationDomainError> {
        self.definition_of(role)
            .map(|definition| definition.priority)
            .ok_or_else(|| AuthorizationDomainError::UnknownRole(role.trim().to_string()))
    }

    pub fn meets_minimum(&self, user_role: Option<&str>, required_role: &str) -> bool {
        let Some(user_role) = user_role else {
            return false;
        };
        if user_role.trim().is_empty() {
            return false;
        }
        match (self.priority_of(user_role), self.priority_of(required_role)) {
            (Ok(user_priority), Ok(required_priority)) => user_priority >= required_priority,
            _ => false,
        }
    }
}
