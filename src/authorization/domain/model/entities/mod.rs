pub mod permission_matrix;
pub mod rls_field_bindings;
