use crate::record_api::domain::model::{
    enums::record_api_domain_error::RecordApiDomainError,
    value_objects::resource_slug::ResourceSlug,
};

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 200;

#[derive(Clone, Debug)]
pub struct ListRecordsQuery {
    principal: String,
    role: Option<String>,
    resource: ResourceSlug,
    filters: Vec<(String, String)>,
    order_by: Option<String>,
    order_desc: bool,
    limit: i64,
    offset: i64,
}

pub struct ListRecordsQueryParts {
    pub principal: String,
    pub role: Option<String>,
    pub resource: String,
    pub filters: Vec<(String, String)>,
    pub order_by: Option<String>,
    pub order_desc: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListRecordsQuery {
    pub fn new(parts: ListRecordsQueryParts) -> Result<Self, RecordApiDomainError> {
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
            filters: parts.filters,
            order_by: parts
                .order_by
                .map(|column| column.trim().to_string())
                .filter(|column| !column.is_empty()),
            order_desc: parts.order_desc,
            limit: parts
                .limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            offset: parts.offset.unwrap_or(0).max(0),
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

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn order_desc(&self) -> bool {
        self.order_desc
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
