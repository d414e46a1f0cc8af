use crate::record_api::domain::model::{
    enums::record_api_domain_error::RecordApiDomainError,
    value_objects::{record_identifier::RecordIdentifier, resource_slug::ResourceSlug},
};

#[derive(Clone, Debug)]
pub struct DeleteRecordCommand {
    principal: String,
    role: Option<String>,
    resource: ResourceSlug,
    record_id: RecordIdentifier,
}

pub struct DeleteRecordCommandParts {
    pub principal: String,
    pub role: Option<String>,
    pub resource: String,
    pub record_id: String,
}

impl DeleteRecordCommand {
    pub fn new(parts: DeleteRecordCommandParts) -> Result<Self, RecordApiDomainError> {
        let principal = parts.principal.trim().to_string();
        if principal.is_empty() {
            return Err(RecordApiDomainError::InvalidPrincipalId);
        }

        Ok(Self {
            principal,
            role: parts
                .role
                .map(|role| role.trim().to_string())
                .filter(|role| !role.is_empty()),
            resource: ResourceSlug::new(parts.resource)?,
            record_id: RecordIdentifier::new(parts.record_id)?,
        })
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn resource(&self) -> &ResourceSlug {
        &self.resource
    }

    pub fn record_id(&self) -> &RecordIdentifier {
        &self.record_id
    }
}
