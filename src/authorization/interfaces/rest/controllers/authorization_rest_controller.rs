use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::authorization::{
    domain::{
        model::{
            entities::permission_matrix::PermissionMatrix,
            enums::{
                authorization_domain_error::AuthorizationDomainError,
                operation_kind::OperationKind,
            },
        },
        services::permission_evaluator::PermissionEvaluator,
    },
    interfaces::rest::resources::{
        allowed_operations_resource::{
            AllowedOperationsQueryResource, AllowedOperationsResponseResource,
        },
        authorization_error_response_resource::AuthorizationErrorResponseResource,
        check_permission_request_resource::{
            CheckPermissionRequestResource, CheckPermissionResponseResource,
        },
        permission_matrix_resource::{
            MatrixOperationRuleResource, MatrixResourceRulesResource, MatrixRoleResource,
            PermissionMatrixResource,
        },
    },
};

#[derive(Clone)]
pub struct AuthorizationRestControllerState {
    pub evaluator: Arc<dyn PermissionEvaluator>,
    pub matrix: Arc<PermissionMatrix>,
}

pub fn router(state: AuthorizationRestControllerState) -> Router {
    Router::new()
        .route("/authorization/permissions/check", post(check_permission))
        .route(
            "/authorization/permissions/allowed-operations",
            get(list_allowed_operations),
        )
        .route("/authorization/matrix", get(export_permission_matrix))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/authorization/permissions/check",
    tag = "authorization",
    request_body = CheckPermissionRequestResource,
    responses(
        (status = 200, description = "Permission decision", body = CheckPermissionResponseResource),
        (status = 400, description = "Invalid request", body = AuthorizationErrorResponseResource)
    )
)]
pub async fn check_permission(
    State(state): State<AuthorizationRestControllerState>,
    Json(request): Json<CheckPermissionRequestResource>,
) -> Result<
    Json<CheckPermissionResponseResource>,
    (StatusCode, Json<AuthorizationErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err(map_validation_error(validation_error));
    }

    let operation = OperationKind::parse(&request.operation).map_err(map_domain_error)?;
    let decision =
        state
            .evaluator
            .check_permission(request.role.as_deref(), &request.resource, operation);

    Ok(Json(CheckPermissionResponseResource {
        allowed: decision.allowed,
        denial_reason: decision.denial_reason,
        minimum_role: decision
            .minimum_required
            .as_ref()
            .map(|role| role.name.clone()),
        minimum_priority: decision.minimum_required.map(|role| role.priority),
    }))
}

#[utoipa::path(
    get,
    path = "/authorization/permissions/allowed-operations",
    tag = "authorization",
    params(AllowedOperationsQueryResource),
    responses(
        (status = 200, description = "Operations allowed for the role", body = AllowedOperationsResponseResource),
        (status = 400, description = "Invalid request", body = AuthorizationErrorResponseResource)
    )
)]
pub async fn list_allowed_operations(
    State(state): State<AuthorizationRestControllerState>,
    Query(query): Query<AllowedOperationsQueryResource>,
) -> Result<
    Json<AllowedOperationsResponseResource>,
    (StatusCode, Json<AuthorizationErrorResponseResource>),
> {
    if let Err(validation_error) = query.validate() {
        return Err(map_validation_error(validation_error));
    }

    let operations = state
        .evaluator
        .allowed_operations(query.role.as_deref(), &query.resource);

    Ok(Json(AllowedOperationsResponseResource {
        can_access: !operations.is_empty(),
        operations: operations
            .into_iter()
            .map(|operation| operation.as_str().to_string())
            .collect(),
        resource: query.resource,
        role: query.role,
    }))
}

#[utoipa::path(
    get,
    path = "/authorization/matrix",
    tag = "authorization",
    responses(
        (status = 200, description = "Declarative permission matrix", body = PermissionMatrixResource)
    )
)]
pub async fn export_permission_matrix(
    State(state): State<AuthorizationRestControllerState>,
) -> Json<PermissionMatrixResource> {
    let matrix = &state.matrix;

    let roles = matrix
        .roles()
        .iter()
        .map(|role| MatrixRoleResource {
            name: role.name.clone(),
            priority: role.priority,
        })
        .collect();

    let mut resources = std::collections::BTreeMap::new();
    for (resource_name, resource_document) in &matrix.document().resources {
        let mut operations = std::collections::BTreeMap::new();
        for operation_name in resource_document.operations.keys() {
            let Ok(operation) = OperationKind::parse(operation_name) else {
                continue;
            };
            if let Some(rule) = matrix.permission_rule(resource_name, operation) {
                operations.insert(
                    operation.as_str().to_string(),
                    MatrixOperationRuleResource {
                        minimum_role: rule.minimum_role.name.clone(),
                        minimum_priority: rule.minimum_priority,
                    },
                );
            }
        }

        resources.insert(
            resource_name.clone(),
            MatrixResourceRulesResource {
                operations,
                row_security: resource_document.row_security.clone(),
            },
        );
    }

    Json(PermissionMatrixResource {
        version: matrix.version(),
        loaded_at: matrix.loaded_at().to_rfc3339(),
        roles,
        resources,
    })
}

fn map_validation_error(
    error: validator::ValidationErrors,
) -> (StatusCode, Json<AuthorizationErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        Json(AuthorizationErrorResponseResource {
            code: "VALIDATION_FAILED".to_string(),
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(
    error: AuthorizationDomainError,
) -> (StatusCode, Json<AuthorizationErrorResponseResource>) {
    let code = match &error {
        AuthorizationDomainError::UnknownOperation(_) => "UNKNOWN_OPERATION",
        AuthorizationDomainError::UnknownRole(_) => "UNKNOWN_ROLE",
        AuthorizationDomainError::UnknownRowSecurityPolicy(_) => "UNKNOWN_ROW_SECURITY_POLICY",
        AuthorizationDomainError::InvalidRoleName
        | AuthorizationDomainError::InvalidResourceName
        | AuthorizationDomainError::InvalidPrincipalId => "VALIDATION_FAILED",
    };

    (
        StatusCode::BAD_REQUEST,
        Json(AuthorizationErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
