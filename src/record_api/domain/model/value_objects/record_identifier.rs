use crate::record_api::domain::model::enums::record_api_domain_error::RecordApiDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RecordIdentifier(String);

impl RecordIdentifier {
    pub fn new(value: String) -> Result<Self, RecordApiDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            return Err(RecordApiDomainError::InvalidRecordIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
