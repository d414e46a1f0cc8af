use serde_json::Value;

use crate::record_api::domain::model::{
    enums::record_api_domain_error::RecordApiDomainError,
    value_objects::resource_slug::ResourceSlug,
};

#[derive(Clone, Debug)]
pub struct CreateRecordCommand {
    principal: String,
    role: Option<String>,
    resource: ResourceSlug,
    payload: Value,
}

pub struct CreateRecordCommandParts {
    pub principal: String,
    pub role: Option<String>,
    pub resource: String,
    pub payload: Value,
}

impl CreateRecordCommand {
    pub fn new(parts: CreateRecordCommandParts) -> Result<Self, RecordApiDomainError> {
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
            payload: parts.payload,
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

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}
