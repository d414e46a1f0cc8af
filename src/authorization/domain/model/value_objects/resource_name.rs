use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(value: String) -> Result<Self, AuthorizationDomainError> {
        let valid = !value.trim().is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid {
            return Err(AuthorizationDomainError::InvalidResourceName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
