pub mod matrix_permission_evaluator_impl;
