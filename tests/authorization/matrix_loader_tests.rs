use fieldserve_api::authorization::domain::model::{
    entities::permission_matrix::PermissionMatrix,
    enums::{
        operation_kind::OperationKind, permission_matrix_error::PermissionMatrixError,
        row_security_policy::RowSecurityPolicy,
    },
};
use serde_json::json;

use crate::support::{field_service_matrix, matrix_document};

fn load(document: serde_json::Value) -> Result<PermissionMatrix, PermissionMatrixError> {
    PermissionMatrix::from_json(&document.to_string())
}

#[test]
fn loads_a_valid_document() {
    let matrix = load(matrix_document()).expect("valid document");

    assert_eq!(matrix.version(), 7);
    assert_eq!(
        matrix
            .roles()
            .iter()
            .map(|role| role.name.as_str())
            .collect::<Vec<_>>(),
        vec!["client", "technician", "admin"]
    );
    assert_eq!(matrix.role_priority("admin"), Some(3));
    assert!(matrix.contains_resource("tickets"));
    assert_eq!(
        matrix
            .minimum_role("tickets", OperationKind::Delete)
            .map(|role| role.name.as_str()),
        Some("admin")
    );
}

#[test]
fn rejects_an_unparseable_document() {
    let result = PermissionMatrix::from_json("not json at all");
    assert!(matches!(
        result,
        Err(PermissionMatrixError::InvalidDocument(_))
    ));
}

#[test]
fn rejects_an_empty_role_set() {
    let mut document = matrix_document();
    document["roles"] = json!([]);

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::EmptyRoleSet)
    ));
}

#[test]
fn rejects_duplicate_role_names_case_insensitively() {
    let mut document = matrix_document();
    document["roles"]
        .as_array_mut()
        .expect("roles array")
        .push(json!({ "name": "Admin", "priority": 9 }));

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::DuplicateRoleName(_))
    ));
}

#[test]
fn rejects_duplicate_priorities() {
    let mut document = matrix_document();
    document["roles"]
        .as_array_mut()
        .expect("roles array")
        .push(json!({ "name": "auditor", "priority": 2 }));

    let result = load(document);
    assert!(matches!(
        result,
        Err(PermissionMatrixError::DuplicateRolePriority { priority: 2, .. })
    ));
}

#[test]
fn rejects_an_unknown_minimum_role_reference() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["operations"]["delete"]["minimum_role"] = json!("owner");

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::UnknownRoleReference { .. })
    ));
}

#[test]
fn rejects_a_resource_missing_an_operation() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["operations"]
        .as_object_mut()
        .expect("operations object")
        .remove("delete");

    let result = load(document);
    match result {
        Err(PermissionMatrixError::MissingOperation {
            resource,
            operation,
        }) => {
            assert_eq!(resource, "tickets");
            assert_eq!(operation, "delete");
        }
        other => panic!("expected MissingOperation, got {other:?}"),
    }
}

#[test]
fn rejects_an_unknown_operation_name() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["operations"]["publish"] =
        json!({ "minimum_role": "admin" });

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::UnknownOperationName { .. })
    ));
}

#[test]
fn rejects_an_unknown_row_security_role() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["row_security"]["owner"] = json!("all_records");

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::UnknownRowSecurityRole { .. })
    ));
}

#[test]
fn rejects_an_unknown_row_security_policy() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["row_security"]["client"] = json!("everything_everywhere");

    assert!(matches!(
        load(document),
        Err(PermissionMatrixError::UnknownRowSecurityPolicy { .. })
    ));
}

#[test]
fn resolves_minimum_role_references_case_insensitively() {
    let mut document = matrix_document();
    document["resources"]["tickets"]["operations"]["delete"]["minimum_role"] = json!("Admin");

    let matrix = load(document).expect("valid document");
    assert_eq!(
        matrix
            .minimum_role("tickets", OperationKind::Delete)
            .map(|role| role.name.as_str()),
        Some("admin")
    );
}

#[test]
fn recomputes_the_denormalized_minimum_priority() {
    let matrix = field_service_matrix();

    for resource in matrix.resource_names() {
        for operation in OperationKind::all() {
            let rule = matrix
                .permission_rule(resource, *operation)
                .expect("every resource defines all four operations");
            assert_eq!(
                Some(rule.minimum_priority),
                matrix.role_priority(&rule.minimum_role.name),
                "minimum_priority drifted for {resource}/{}",
                operation.as_str()
            );
        }
    }
}

#[test]
fn every_policy_name_is_accepted_by_the_loader() {
    for policy in RowSecurityPolicy::all() {
        let mut document = matrix_document();
        document["resources"]["tickets"]["row_security"]["client"] = json!(policy.as_str());

        let matrix = load(document).expect("valid document");
        assert_eq!(
            matrix.row_level_security("client", "tickets"),
            Some(*policy)
        );
    }
}

#[test]
fn built_in_matrix_covers_the_field_service_resources() {
    let matrix = field_service_matrix();

    assert_eq!(
        matrix.resource_names(),
        vec![
            "assets",
            "contracts",
            "customers",
            "invoices",
            "users",
            "work_orders"
        ]
    );
    assert_eq!(matrix.roles().len(), 5);
}
