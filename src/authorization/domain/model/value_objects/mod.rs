pub mod principal_id;
pub mod resource_name;
pub mod role_name;
