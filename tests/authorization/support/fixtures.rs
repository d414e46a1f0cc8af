use std::sync::Arc;

use fieldserve_api::authorization::{
    application::query_services::matrix_permission_evaluator_impl::MatrixPermissionEvaluatorImpl,
    domain::model::entities::permission_matrix::PermissionMatrix,
};
use serde_json::{Value, json};

pub fn field_service_matrix() -> PermissionMatrix {
    PermissionMatrix::built_in().expect("valid built-in matrix")
}

pub fn evaluator() -> MatrixPermissionEvaluatorImpl {
    MatrixPermissionEvaluatorImpl::new(Arc::new(field_service_matrix()))
}

// Small three-role document the loader tests mutate before parsing.
pub fn matrix_document() -> Value {
    json!({
        "version": 7,
        "roles": [
            { "name": "client", "priority": 1 },
            { "name": "technician", "priority": 2 },
            { "name": "admin", "priority": 3 }
        ],
        "resources": {
            "tickets": {
                "operations": {
                    "create": { "minimum_role": "technician" },
                    "read": { "minimum_role": "client" },
                    "update": { "minimum_role": "technician" },
                    "delete": { "minimum_role": "admin" }
                },
                "row_security": {
                    "client": "own_record_only",
                    "technician": "assigned_work_orders_only",
                    "admin": "all_records"
                }
            }
        }
    })
}
