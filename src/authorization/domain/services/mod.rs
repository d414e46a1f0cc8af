pub mod output_field_filter;
pub mod permission_evaluator;
pub mod rls_filter_synthesizer;
pub mod role_hierarchy;
