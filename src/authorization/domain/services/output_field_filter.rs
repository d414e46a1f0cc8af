use serde_json::{Map, Value};

pub const ALWAYS_SENSITIVE_FIELDS: &[&str] = &[
    "auth0_id",
    "password",
    "password_hash",
    "mfa_secret",
    "api_key",
    "access_token",
    "refresh_token",
    "session_token",
];

#[derive(Clone, Debug, Default)]
pub struct OutputFieldConfig {
    pub sensitive_fields: Vec<String>,
    pub output_fields: Option<Vec<String>>,
}

impl OutputFieldConfig {
    fn is_sensitive(&self, field: &str) -> bool {
        ALWAYS_SENSITIVE_FIELDS.contains(&field)
            || self.sensitive_fields.iter().any(|name| name == field)
    }

    fn is_selected(&self, field: &str) -> bool {
        match &self.output_fields {
            None => true,
            Some(fields) => fields.iter().any(|name| name == field),
        }
    }
}

pub fn filter_record(record: &Value, config: &OutputFieldConfig) -> Value {
    let Some(object) = record.as_object() else {
        return record.clone();
    };

    let mut filtered = Map::new();
    for (field, value) in object {
        if config.is_selected(field) && !config.is_sensitive(field) {
            filtered.insert(field.clone(), value.clone());
        }
    }
    Value::Object(filtered)
}

pub fn filter_records(records: &[Value], config: &OutputFieldConfig) -> Vec<Value> {
    records
        .iter()
        .map(|record| filter_record(record, config))
        .collect()
}
