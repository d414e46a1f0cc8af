use std::sync::Arc;

use crate::authorization::{
    application::query_services::matrix_permission_evaluator_impl::MatrixPermissionEvaluatorImpl,
    domain::{
        model::{
            entities::permission_matrix::PermissionMatrix,
            enums::{
                authorization_domain_error::AuthorizationDomainError,
                operation_kind::OperationKind,
            },
            value_objects::principal_id::PrincipalId,
        },
        services::{
            permission_evaluator::PermissionEvaluator,
            rls_filter_synthesizer::{RlsContext, RlsFilterResult, build_rls_filter},
        },
    },
    interfaces::acl::authorization_facade::{
        AuthorizationFacade, PermissionCheckDecision, PermissionCheckRequest, ResolvedRowFilter,
        RowFilterRequest,
    },
};

pub struct AuthorizationFacadeImpl {
    matrix: Arc<PermissionMatrix>,
    evaluator: MatrixPermissionEvaluatorImpl,
}

impl AuthorizationFacadeImpl {
    pub fn new(matrix: Arc<PermissionMatrix>) -> Self {
        let evaluator = MatrixPermissionEvaluatorImpl::new(matrix.clone());
        Self { matrix, evaluator }
    }
}

impl AuthorizationFacade for AuthorizationFacadeImpl {
    fn check_permission(
        &self,
        request: PermissionCheckRequest,
    ) -> Result<PermissionCheckDecision, AuthorizationDomainError> {
        let operation = OperationKind::parse(&request.operation)?;
        let decision =
            self.evaluator
                .check_permission(request.role.as_deref(), &request.resource, operation);

        Ok(PermissionCheckDecision {
            allowed: decision.allowed,
            denial_reason: decision.denial_reason,
            minimum_role: decision
                .minimum_required
                .as_ref()
                .map(|role| role.name.clone()),
            minimum_priority: decision.minimum_required.map(|role| role.priority),
        })
    }

    fn build_row_filter(
        &self,
        request: RowFilterRequest,
    ) -> Result<ResolvedRowFilter, AuthorizationDomainError> {
        let principal_id = PrincipalId::new(request.principal_id)?;

        let policy = request
            .role
            .as_deref()
            .and_then(|role| self.matrix.row_level_security(role, &request.resource));

        let Some(policy) = policy else {
            return Ok(ResolvedRowFilter {
                policy: None,
                filter: RlsFilterResult::unrestricted(),
            });
        };

        let context = RlsContext {
            policy: policy.as_str().to_string(),
            principal_id,
        };
        let filter = build_rls_filter(Some(&context), &request.bindings, request.param_offset);

        Ok(ResolvedRowFilter {
            policy: Some(policy.as_str().to_string()),
            filter,
        })
    }

    fn allowed_operations(&self, role: Option<&str>, resource: &str) -> Vec<OperationKind> {
        self.evaluator.allowed_operations(role, resource)
    }

    fn can_access_resource(&self, role: Option<&str>, resource: &str) -> bool {
        self.evaluator.can_access_resource(role, resource)
    }

    fn has_minimum_role(&self, role: Option<&str>, required_role: &str) -> bool {
        self.evaluator.has_minimum_role(role, required_role)
    }
}
