pub mod record_command_service;
pub mod record_query_service;
