use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::authorization::domain::model::{
    enums::{
        operation_kind::OperationKind, permission_matrix_error::PermissionMatrixError,
        row_security_policy::RowSecurityPolicy,
    },
    value_objects::{resource_name::ResourceName, role_name::RoleName},
};

const DEFAULT_PERMISSION_MATRIX: &str = include_str!("../../../default_permission_matrix.json");

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PermissionMatrixDocument {
    #[serde(default = "default_document_version")]
    pub version: u32,
    pub roles: Vec<RoleDocument>,
    pub resources: BTreeMap<String, ResourceDocument>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoleDocument {
    pub name: String,
    pub priority: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResourceDocument {
    pub operations: BTreeMap<String, OperationDocument>,
    #[serde(default)]
    pub row_security: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OperationDocument {
    pub minimum_role: String,
}

fn default_document_version() -> u32 {
    1
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleDefinition {
    pub name: String,
    pub priority: i32,
}

#[derive(Clone, Debug)]
pub struct PermissionRule {
    pub minimum_role: RoleDefinition,
    pub minimum_priority: i32,
}

#[derive(Clone, Debug)]
struct ResourcePermissions {
    operations: HashMap<OperationKind, PermissionRule>,
    row_security: HashMap<String, RowSecurityPolicy>,
}

#[derive(Clone, Debug)]
pub struct PermissionMatrix {
    version: u32,
    loaded_at: DateTime<Utc>,
    roles: Vec<RoleDefinition>,
    roles_by_key: HashMap<String, RoleDefinition>,
    resources: HashMap<String, ResourcePermissions>,
    document: PermissionMatrixDocument,
}

fn role_key(role: &str) -> String {
    role.trim().to_lowercase()
}

impl PermissionMatrix {
    pub fn from_json(raw: &str) -> Result<Self, PermissionMatrixError> {
        let document: PermissionMatrixDocument = serde_json::from_str(raw)
            .map_err(|e| PermissionMatrixError::InvalidDocument(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn built_in() -> Result<Self, PermissionMatrixError> {
        Self::from_json(DEFAULT_PERMISSION_MATRIX)
    }

    pub fn from_document(
        document: PermissionMatrixDocument,
    ) -> Result<Self, PermissionMatrixError> {
        if document.roles.is_empty() {
            return Err(PermissionMatrixError::EmptyRoleSet);
        }

        let mut roles_by_key: HashMap<String, RoleDefinition> = HashMap::new();
        let mut names_by_priority: HashMap<i32, String> = HashMap::new();
        for role in &document.roles {
            let name = RoleName::new(role.name.clone())
                .map_err(|_| PermissionMatrixError::InvalidRoleName(role.name.clone()))?;
            let key = name.normalized();
            if roles_by_key.contains_key(&key) {
                return Err(PermissionMatrixError::DuplicateRoleName(
                    name.value().to_string(),
                ));
            }
            if let Some(first) = names_by_priority.get(&role.priority) {
                return Err(PermissionMatrixError::DuplicateRolePriority {
                    priority: role.priority,
                    first: first.clone(),
                    second: name.value().to_string(),
                });
            }
            names_by_priority.insert(role.priority, name.value().to_string());
            roles_by_key.insert(
                key,
                RoleDefinition {
                    name: name.value().to_string(),
                    priority: role.priority,
                },
            );
        }

        let mut roles = roles_by_key.values().cloned().collect::<Vec<_>>();
        roles.sort_by_key(|role| role.priority);

        let mut resources = HashMap::new();
        for (resource_name, resource_document) in &document.resources {
            ResourceName::new(resource_name.clone())
                .map_err(|_| PermissionMatrixError::InvalidResourceName(resource_name.clone()))?;

            let mut operations = HashMap::new();
            for (operation_name, operation_document) in &resource_document.operations {
                let operation = OperationKind::parse(operation_name).map_err(|_| {
                    PermissionMatrixError::UnknownOperationName {
                        resource: resource_name.clone(),
                        operation: operation_name.clone(),
                    }
                })?;
                let minimum_role = roles_by_key
                    .get(&role_key(&operation_document.minimum_role))
                    .ok_or_else(|| PermissionMatrixError::UnknownRoleReference {
                        resource: resource_name.clone(),
                        operation: operation.as_str().to_string(),
                        role: operation_document.minimum_role.clone(),
                    })?;
                operations.insert(
                    operation,
                    PermissionRule {
                        minimum_role: minimum_role.clone(),
                        minimum_priority: minimum_role.priority,
                    },
                );
            }
            for operation in OperationKind::all() {
                if !operations.contains_key(operation) {
                    return Err(PermissionMatrixError::MissingOperation {
                        resource: resource_name.clone(),
                        operation: operation.as_str().to_string(),
                    });
                }
            }

            let mut row_security = HashMap::new();
            for (role, policy) in &resource_document.row_security {
                let role_definition = roles_by_key.get(&role_key(role)).ok_or_else(|| {
                    PermissionMatrixError::UnknownRowSecurityRole {
                        resource: resource_name.clone(),
                        role: role.clone(),
                    }
                })?;
                let policy = RowSecurityPolicy::parse(policy).map_err(|_| {
                    PermissionMatrixError::UnknownRowSecurityPolicy {
                        resource: resource_name.clone(),
                        role: role.clone(),
                        policy: policy.clone(),
                    }
                })?;
                row_security.insert(role_key(&role_definition.name), policy);
            }

            resources.insert(
                resource_name.clone(),
                ResourcePermissions {
                    operations,
                    row_security,
                },
            );
        }

        Ok(Self {
            version: document.version,
            loaded_at: Utc::now(),
            roles,
            roles_by_key,
            resources,
            document,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    pub fn role_definition(&self, role: &str) -> Option<&RoleDefinition> {
        self.roles_by_key.get(&role_key(role))
    }

    pub fn role_priority(&self, role: &str) -> Option<i32> {
        self.role_definition(role).map(|role| role.priority)
    }

    pub fn permission_rule(
        &self,
        resource: &str,
        operation: OperationKind,
    ) -> Option<&PermissionRule> {
        self.resources
            .get(resource)
            .and_then(|resource| resource.operations.get(&operation))
    }

    pub fn minimum_role(
        &self,
        resource: &str,
        operation: OperationKind,
    ) -> Option<&RoleDefinition> {
        self.permission_rule(resource, operation)
            .map(|rule| &rule.minimum_role)
    }

    pub fn row_level_security(&self, role: &str, resource: &str) -> Option<RowSecurityPolicy> {
        self.resources
            .get(resource)
            .and_then(|resource| resource.row_security.get(&role_key(role)))
            .copied()
    }

    pub fn contains_resource(&self, resource: &str) -> bool {
        self.resources.contains_key(resource)
    }

    pub fn resource_names(&self) -> Vec<&str> {
        let mut names = self.resources.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn document(&self) -> &PermissionMatrixDocument {
        &self.document
    }
}
