pub mod allowed_operations_resource;
pub mod authorization_error_response_resource;
pub mod check_permission_request_resource;
pub mod permission_matrix_resource;
