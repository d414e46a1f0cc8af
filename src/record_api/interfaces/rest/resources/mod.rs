pub mod record_api_error_response_resource;
pub mod record_auth_headers_resource;
pub mod record_list_query_resource;
pub mod record_payload_resource;
