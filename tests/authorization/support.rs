#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{evaluator, field_service_matrix, matrix_document};
