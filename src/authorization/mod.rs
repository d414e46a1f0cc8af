use std::sync::Arc;

use axum::Router;

use crate::{
    authorization::{
        application::{
            acl::authorization_facade_impl::AuthorizationFacadeImpl,
            query_services::matrix_permission_evaluator_impl::MatrixPermissionEvaluatorImpl,
        },
        domain::model::{
            entities::permission_matrix::PermissionMatrix,
            enums::permission_matrix_error::PermissionMatrixError,
        },
        interfaces::{
            acl::authorization_facade::AuthorizationFacade,
            rest::controllers::authorization_rest_controller::{
                AuthorizationRestControllerState, router,
            },
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn load_permission_matrix(config: &AppConfig) -> Result<PermissionMatrix, PermissionMatrixError> {
    match &config.permission_matrix_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                PermissionMatrixError::InvalidDocument(format!("failed to read '{path}': {e}"))
            })?;
            PermissionMatrix::from_json(&raw)
        }
        None => PermissionMatrix::built_in(),
    }
}

pub fn build_authorization_router(matrix: Arc<PermissionMatrix>) -> Router {
    let evaluator = Arc::new(MatrixPermissionEvaluatorImpl::new(matrix.clone()));

    router(AuthorizationRestControllerState { evaluator, matrix })
}

pub fn build_authorization_facade(matrix: Arc<PermissionMatrix>) -> Arc<dyn AuthorizationFacade> {
    Arc::new(AuthorizationFacadeImpl::new(matrix))
}
