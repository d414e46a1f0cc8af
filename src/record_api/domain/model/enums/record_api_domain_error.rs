use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordApiDomainError {
    #[error("principal id is required")]
    InvalidPrincipalId,

    #[error("resource name is invalid")]
    InvalidResourceName,

    #[error("record id is invalid")]
    InvalidRecordIdentifier,

    #[error("column name is invalid: {0}")]
    InvalidColumnName(String),

    #[error("resource is not exposed by the record catalog")]
    ResourceNotExposed,

    #[error("authentication is required (x-user-id header)")]
    MissingAuthentication,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("field is immutable: {0}")]
    ImmutableFieldViolation(String),

    #[error("payload must be a JSON object")]
    InvalidPayload,

    #[error("payload size exceeded")]
    PayloadTooLarge,

    #[error("invalid filter or sort expression")]
    InvalidQueryParameters,

    #[error("record not found")]
    RecordNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
