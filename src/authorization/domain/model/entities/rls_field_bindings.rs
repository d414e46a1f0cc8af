#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RlsFieldBindings {
    pub own_record_field: String,
    pub customer_field: String,
    pub assigned_field: String,
}

impl Default for RlsFieldBindings {
    fn default() -> Self {
        Self {
            own_record_field: "id".to_string(),
            customer_field: "customer_id".to_string(),
            assigned_field: "assigned_technician_id".to_string(),
        }
    }
}
