use crate::record_api::domain::model::enums::record_api_domain_error::RecordApiDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResourceSlug(String);

impl ResourceSlug {
    pub fn new(value: String) -> Result<Self, RecordApiDomainError> {
        let valid = !value.trim().is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid {
            return Err(RecordApiDomainError::InvalidResourceName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
