use serde_json::Value;

use crate::record_api::domain::model::enums::{
    record_api_action::RecordApiAction, record_api_domain_error::RecordApiDomainError,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RowRestriction {
    pub clause: String,
    pub params: Vec<String>,
    pub applied: bool,
}

pub trait AuthorizationGateway: Send + Sync {
    fn ensure_permitted(
        &self,
        role: Option<&str>,
        resource: &str,
        action: RecordApiAction,
    ) -> Result<(), RecordApiDomainError>;

    fn resolve_row_restriction(
        &self,
        role: Option<&str>,
        resource: &str,
        principal: &str,
        param_offset: usize,
    ) -> Result<RowRestriction, RecordApiDomainError>;

    fn redact_record(&self, resource: &str, record: Value) -> Value;

    fn redact_records(&self, resource: &str, records: Vec<Value>) -> Vec<Value>;
}
