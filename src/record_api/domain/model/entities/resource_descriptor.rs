use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct ResourceDescriptor {
    pub resource_name: String,
    pub table_name: String,
    pub id_column: String,
    pub own_record_field: Option<String>,
    pub customer_field: Option<String>,
    pub assigned_field: Option<String>,
    pub sensitive_fields: Vec<String>,
    pub output_fields: Option<Vec<String>>,
    pub immutable_fields: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResourceCatalog {
    descriptors: HashMap<String, ResourceDescriptor>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn descriptor(resource_name: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        resource_name: resource_name.to_string(),
        table_name: resource_name.to_string(),
        id_column: "id".to_string(),
        own_record_field: None,
        customer_field: None,
        assigned_field: None,
        sensitive_fields: Vec::new(),
        output_fields: None,
        immutable_fields: strings(&["id", "created_at"]),
    }
}

impl ResourceCatalog {
    pub fn new(descriptors: Vec<ResourceDescriptor>) -> Self {
        Self {
            descriptors: descriptors
                .into_iter()
                .map(|descriptor| (descriptor.resource_name.clone(), descriptor))
                .collect(),
        }
    }

    pub fn field_service_default() -> Self {
        Self::new(vec![
            ResourceDescriptor {
                immutable_fields: strings(&["id", "auth0_id", "created_at"]),
                ..descriptor("users")
            },
            descriptor("customers"),
            ResourceDescriptor {
                immutable_fields: strings(&[
                    "id",
                    "work_order_number",
                    "customer_id",
                    "created_at",
                ]),
                ..descriptor("work_orders")
            },
            ResourceDescriptor {
                immutable_fields: strings(&["id", "serial_number", "created_at"]),
                ..descriptor("assets")
            },
            ResourceDescriptor {
                sensitive_fields: strings(&["internal_notes"]),
                immutable_fields: strings(&["id", "invoice_number", "customer_id", "created_at"]),
                ..descriptor("invoices")
            },
            ResourceDescriptor {
                output_fields: Some(strings(&[
                    "id",
                    "contract_number",
                    "customer_id",
                    "status",
                    "start_date",
                    "end_date",
                    "monthly_value",
                ])),
                immutable_fields: strings(&["id", "contract_number", "customer_id", "created_at"]),
                ..descriptor("contracts")
            },
        ])
    }

    pub fn descriptor(&self, resource: &str) -> Option<&ResourceDescriptor> {
        self.descriptors.get(resource)
    }

    pub fn resource_names(&self) -> Vec<&str> {
        let mut names = self
            .descriptors
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}
