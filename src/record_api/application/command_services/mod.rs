pub mod record_command_service_impl;
