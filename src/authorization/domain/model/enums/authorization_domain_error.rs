use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorizationDomainError {
    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("resource name is invalid")]
    InvalidResourceName,

    #[error("principal id is invalid")]
    InvalidPrincipalId,

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unknown row security policy: {0}")]
    UnknownRowSecurityPolicy(String),
}
