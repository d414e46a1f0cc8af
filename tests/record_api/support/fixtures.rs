use fieldserve_api::{
    authorization::domain::model::entities::permission_matrix::PermissionMatrix,
    record_api::domain::model::{
        commands::{
            create_record_command::{CreateRecordCommand, CreateRecordCommandParts},
            delete_record_command::{DeleteRecordCommand, DeleteRecordCommandParts},
            update_record_command::{UpdateRecordCommand, UpdateRecordCommandParts},
        },
        queries::{
            get_record_query::{GetRecordQuery, GetRecordQueryParts},
            list_records_query::{ListRecordsQuery, ListRecordsQueryParts},
        },
    },
};
use serde_json::{Value, json};

pub const PRINCIPAL_1_ID: &str = "0192aa0e-6d4f-7bb1-9b69-3f61f3d5c001";

pub fn list_query(role: Option<&str>, resource: &str) -> ListRecordsQuery {
    list_query_with_filters(role, resource, Vec::new())
}

pub fn list_query_with_filters(
    role: Option<&str>,
    resource: &str,
    filters: Vec<(&str, &str)>,
) -> ListRecordsQuery {
    ListRecordsQuery::new(ListRecordsQueryParts {
        principal: PRINCIPAL_1_ID.to_string(),
        role: role.map(str::to_string),
        resource: resource.to_string(),
        filters: filters
            .into_iter()
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect(),
        order_by: None,
        order_desc: false,
        limit: None,
        offset: None,
    })
    .expect("valid list query")
}

pub fn get_query(role: Option<&str>, resource: &str, record_id: &str) -> GetRecordQuery {
    GetRecordQuery::new(GetRecordQueryParts {
        principal: PRINCIPAL_1_ID.to_string(),
        role: role.map(str::to_string),
        resource: resource.to_string(),
        record_id: record_id.to_string(),
    })
    .expect("valid get query")
}

pub fn create_command(role: Option<&str>, resource: &str, payload: Value) -> CreateRecordCommand {
    CreateRecordCommand::new(CreateRecordCommandParts {
        principal: PRINCIPAL_1_ID.to_string(),
        role: role.map(str::to_string),
        resource: resource.to_string(),
        payload,
    })
    .expect("valid create command")
}

pub fn update_command(
    role: Option<&str>,
    resource: &str,
    record_id: &str,
    payload: Value,
) -> UpdateRecordCommand {
    UpdateRecordCommand::new(UpdateRecordCommandParts {
        principal: PRINCIPAL_1_ID.to_string(),
        role: role.map(str::to_string),
        resource: resource.to_string(),
        record_id: record_id.to_string(),
        payload,
    })
    .expect("valid update command")
}

pub fn delete_command(role: Option<&str>, resource: &str, record_id: &str) -> DeleteRecordCommand {
    DeleteRecordCommand::new(DeleteRecordCommandParts {
        principal: PRINCIPAL_1_ID.to_string(),
        role: role.map(str::to_string),
        resource: resource.to_string(),
        record_id: record_id.to_string(),
    })
    .expect("valid delete command")
}

// Work orders where the technician role passes RBAC but has no row security
// mapping, so row-filter resolution must fail closed.
pub fn matrix_without_technician_row_security() -> PermissionMatrix {
    let document = json!({
        "version": 2,
        "roles": [
            { "name": "client", "priority": 1 },
            { "name": "technician", "priority": 2 },
            { "name": "dispatcher", "priority": 3 },
            { "name": "manager", "priority": 4 },
            { "name": "admin", "priority": 5 }
        ],
        "resources": {
            "work_orders": {
                "operations": {
                    "create": { "minimum_role": "dispatcher" },
                    "read": { "minimum_role": "client" },
                    "update": { "minimum_role": "technician" },
                    "delete": { "minimum_role": "manager" }
                },
                "row_security": {
                    "client": "own_work_orders_only",
                    "dispatcher": "all_records",
                    "manager": "all_records",
                    "admin": "all_records"
                }
            }
        }
    });

    PermissionMatrix::from_json(&document.to_string()).expect("valid fixture matrix")
}
