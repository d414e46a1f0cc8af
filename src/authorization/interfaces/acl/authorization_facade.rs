use crate::authorization::domain::{
    model::{
        entities::rls_field_bindings::RlsFieldBindings,
        enums::{
            authorization_domain_error::AuthorizationDomainError, operation_kind::OperationKind,
        },
    },
    services::rls_filter_synthesizer::RlsFilterResult,
};

#[derive(Clone, Debug)]
pub struct PermissionCheckRequest {
    pub role: Option<String>,
    pub resource: String,
    pub operation: String,
}

#[derive(Clone, Debug)]
pub struct PermissionCheckDecision {
    pub allowed: bool,
    pub denial_reason: Option<String>,
    pub minimum_role: Option<String>,
    pub minimum_priority: Option<i32>,
}

#[derive(Clone, Debug)]
pub struct RowFilterRequest {
    pub role: Option<String>,
    pub resource: String,
    pub principal_id: String,
    pub bindings: RlsFieldBindings,
    pub param_offset: usize,
}

/// `policy` is `None` when the matrix resolves no row security for the
/// role/resource pair; callers own the fail-closed decision in that case.
#[derive(Clone, Debug)]
pub struct ResolvedRowFilter {
    pub policy: Option<String>,
    pub filter: RlsFilterResult,
}

pub trait AuthorizationFacade: Send + Sync {
    fn check_permission(
        &self,
        request: PermissionCheckRequest,
    ) -> Result<PermissionCheckDecision, AuthorizationDomainError>;

    fn build_row_filter(
        &self,
        request: RowFilterRequest,
    ) -> Result<ResolvedRowFilter, AuthorizationDomainError>;

    fn allowed_operations(&self, role: Option<&str>, resource: &str) -> Vec<OperationKind>;

    fn can_access_resource(&self, role: Option<&str>, resource: &str) -> bool;

    fn has_minimum_role(&self, role: Option<&str>, required_role: &str) -> bool;
}
