pub mod record_api_rest_controller;
