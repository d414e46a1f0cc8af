use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermissionMatrixError {
    #[error("permission matrix document could not be parsed: {0}")]
    InvalidDocument(String),

    #[error("permission matrix defines no roles")]
    EmptyRoleSet,

    #[error("role name '{0}' is invalid")]
    InvalidRoleName(String),

    #[error("duplicate role name '{0}'")]
    DuplicateRoleName(String),

    #[error("roles '{first}' and '{second}' share priority {priority}")]
    DuplicateRolePriority {
        priority: i32,
        first: String,
        second: String,
    },

    #[error("resource name '{0}' is invalid")]
    InvalidResourceName(String),

    #[error("resource '{resource}' does not define operation '{operation}'")]
    MissingOperation { resource: String, operation: String },

    #[error("resource '{resource}' defines unknown operation '{operation}'")]
    UnknownOperationName { resource: String, operation: String },

    #[error("resource '{resource}' operation '{operation}' references unknown role '{role}'")]
    UnknownRoleReference {
        resource: String,
        operation: String,
        role: String,
    },

    #[error("resource '{resource}' row security references unknown role '{role}'")]
    UnknownRowSecurityRole { resource: String, role: String },

    #[error("resource '{resource}' role '{role}' references unknown row security policy '{policy}'")]
    UnknownRowSecurityPolicy {
        resource: String,
        role: String,
        policy: String,
    },
}
