pub mod record_query_service_impl;
