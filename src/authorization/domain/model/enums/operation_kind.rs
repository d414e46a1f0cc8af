use super::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OperationKind {
    Create,
    Read,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AuthorizationDomainError> {
        match value.trim() {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(AuthorizationDomainError::UnknownOperation(
                other.to_string(),
            )),
        }
    }

    pub fn all() -> &'static [Self] {
        const VALUES: [OperationKind; 4] = [
            OperationKind::Create,
            OperationKind::Read,
            OperationKind::Update,
            OperationKind::Delete,
        ];
        &VALUES
    }
}
