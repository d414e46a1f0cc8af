use std::sync::Arc;

use serde_json::Value;

use crate::{
    authorization::{
        domain::{
            model::{
                entities::rls_field_bindings::RlsFieldBindings,
                enums::authorization_domain_error::AuthorizationDomainError,
            },
            services::output_field_filter::{OutputFieldConfig, filter_record, filter_records},
        },
        interfaces::acl::authorization_facade::{
            AuthorizationFacade, PermissionCheckRequest, RowFilterRequest,
        },
    },
    record_api::{
        domain::model::{
            entities::resource_descriptor::ResourceCatalog,
            enums::{
                record_api_action::RecordApiAction,
                record_api_domain_error::RecordApiDomainError,
            },
        },
        interfaces::acl::authorization_gateway::{AuthorizationGateway, RowRestriction},
    },
};

pub struct AuthorizationGatewayImpl {
    facade: Arc<dyn AuthorizationFacade>,
    catalog: Arc<ResourceCatalog>,
}

impl AuthorizationGatewayImpl {
    pub fn new(facade: Arc<dyn AuthorizationFacade>, catalog: Arc<ResourceCatalog>) -> Self {
        Self { facade, catalog }
    }

    fn bindings_for(&self, resource: &str) -> RlsFieldBindings {
        let mut bindings = RlsFieldBindings::default();
        if let Some(descriptor) = self.catalog.descriptor(resource) {
            if let Some(field) = &descriptor.own_record_field {
                bindings.own_record_field = field.clone();
            }
            if let Some(field) = &descriptor.customer_field {
                bindings.customer_field = field.clone();
            }
            if let Some(field) = &descriptor.assigned_field {
                bindings.assigned_field = field.clone();
            }
        }
        bindings
    }

    fn output_config_for(&self, resource: &str) -> OutputFieldConfig {
        match self.catalog.descriptor(resource) {
            Some(descriptor) => OutputFieldConfig {
                sensitive_fields: descriptor.sensitive_fields.clone(),
                output_fields: descriptor.output_fields.clone(),
            },
            None => OutputFieldConfig::default(),
        }
    }
}

impl AuthorizationGateway for AuthorizationGatewayImpl {
    fn ensure_permitted(
        &self,
        role: Option<&str>,
        resource: &str,
        action: RecordApiAction,
    ) -> Result<(), RecordApiDomainError> {
        let decision = self
            .facade
            .check_permission(PermissionCheckRequest {
                role: role.map(str::to_string),
                resource: resource.to_string(),
                operation: action.as_str().to_string(),
            })
            .map_err(|e| RecordApiDomainError::InfrastructureError(e.to_string()))?;

        if decision.allowed {
            Ok(())
        } else {
            Err(RecordApiDomainError::AccessDenied(
                decision
                    .denial_reason
                    .unwrap_or_else(|| "access denied".to_string()),
            ))
        }
    }

    fn resolve_row_restriction(
        &self,
        role: Option<&str>,
        resource: &str,
        principal: &str,
        param_offset: usize,
    ) -> Result<RowRestriction, RecordApiDomainError> {
        let resolved = self
            .facade
            .build_row_filter(RowFilterRequest {
                role: role.map(str::to_string),
                resource: resource.to_string(),
                principal_id: principal.to_string(),
                bindings: self.bindings_for(resource),
                param_offset,
            })
            .map_err(|error| match error {
                AuthorizationDomainError::InvalidPrincipalId => {
                    RecordApiDomainError::InvalidPrincipalId
                }
                other => RecordApiDomainError::InfrastructureError(other.to_string()),
            })?;

        // An unresolved policy means row security was never evaluated; every
        // catalog resource expects one, so the only safe answer is a denial.
        if resolved.policy.is_none() {
            return Err(RecordApiDomainError::AccessDenied(
                "no row security policy resolved for this role".to_string(),
            ));
        }

        Ok(RowRestriction {
            clause: resolved.filter.clause,
            params: resolved.filter.params,
            applied: resolved.filter.applied,
        })
    }

    fn redact_record(&self, resource: &str, record: Value) -> Value {
        filter_record(&record, &self.output_config_for(resource))
    }

    fn redact_records(&self, resource: &str, records: Vec<Value>) -> Vec<Value> {
        filter_records(&records, &self.output_config_for(resource))
    }
}
