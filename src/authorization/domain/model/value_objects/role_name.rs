use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(value: String) -> Result<Self, AuthorizationDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuthorizationDomainError::InvalidRoleName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}
