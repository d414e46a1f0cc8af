use fieldserve_api::record_api::domain::{
    model::enums::record_api_domain_error::RecordApiDomainError,
    services::record_command_service::RecordCommandService,
};
use serde_json::json;

use crate::support::{
    PRINCIPAL_1_ID, create_command, create_record_api_harness, delete_command, update_command,
};

#[tokio::test]
async fn update_rejects_immutable_fields_before_touching_the_repository() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_update(update_command(
            Some("manager"),
            "work_orders",
            "wo-1",
            json!({ "customer_id": "cu-2", "status": "done" }),
        ))
        .await;

    match result {
        Err(RecordApiDomainError::ImmutableFieldViolation(field)) => {
            assert_eq!(field, "customer_id");
        }
        other => panic!("expected ImmutableFieldViolation, got {other:?}"),
    }
    assert_eq!(harness.repository.update_calls(), 0);
}

#[tokio::test]
async fn update_binds_the_restriction_after_payload_and_id() {
    let harness = create_record_api_harness();
    harness
        .repository
        .set_record(json!({ "id": "wo-1", "status": "done" }));

    harness
        .command_service
        .handle_update(update_command(
            Some("technician"),
            "work_orders",
            "wo-1",
            json!({ "status": "done" }),
        ))
        .await
        .expect("update allowed");

    let criteria = harness
        .repository
        .last_update_criteria()
        .expect("repository called");
    assert_eq!(criteria.columns, vec!["status".to_string()]);
    assert_eq!(criteria.record_id, "wo-1");
    assert_eq!(criteria.restriction.clause, "assigned_technician_id = $3");
    assert_eq!(criteria.restriction.params, vec![PRINCIPAL_1_ID.to_string()]);
}

#[tokio::test]
async fn update_maps_rows_hidden_by_row_security_to_not_found() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_update(update_command(
            Some("technician"),
            "work_orders",
            "wo-1",
            json!({ "status": "done" }),
        ))
        .await;

    assert!(matches!(result, Err(RecordApiDomainError::RecordNotFound)));
}

#[tokio::test]
async fn update_denies_below_the_minimum_role() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_update(update_command(
            Some("client"),
            "work_orders",
            "wo-1",
            json!({ "status": "done" }),
        ))
        .await;

    match result {
        Err(RecordApiDomainError::AccessDenied(reason)) => {
            assert!(reason.contains("technician"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }
    assert_eq!(harness.repository.update_calls(), 0);
}

#[tokio::test]
async fn create_requires_the_dispatcher_role_for_work_orders() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_create(create_command(
            Some("client"),
            "work_orders",
            json!({ "summary": "broken pump" }),
        ))
        .await;

    match result {
        Err(RecordApiDomainError::AccessDenied(reason)) => {
            assert!(reason.contains("dispatcher"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }
    assert_eq!(harness.repository.create_calls(), 0);
}

#[tokio::test]
async fn create_passes_the_payload_columns_to_the_repository() {
    let harness = create_record_api_harness();

    harness
        .command_service
        .handle_create(create_command(
            Some("dispatcher"),
            "work_orders",
            json!({ "customer_id": "cu-9", "summary": "broken pump" }),
        ))
        .await
        .expect("create allowed");

    let criteria = harness
        .repository
        .last_create_criteria()
        .expect("repository called");
    assert_eq!(criteria.table_name, "work_orders");
    assert_eq!(
        criteria.columns,
        vec!["customer_id".to_string(), "summary".to_string()]
    );
}

#[tokio::test]
async fn create_redacts_the_returned_record() {
    let harness = create_record_api_harness();
    harness.repository.set_record(json!({
        "id": "u-10",
        "email": "new@b.com",
        "auth0_id": "auth0|new"
    }));

    let record = harness
        .command_service
        .handle_create(create_command(
            Some("admin"),
            "users",
            json!({ "email": "new@b.com" }),
        ))
        .await
        .expect("create allowed");

    assert_eq!(record, json!({ "id": "u-10", "email": "new@b.com" }));
}

#[tokio::test]
async fn create_rejects_non_object_payloads() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_create(create_command(Some("admin"), "users", json!([1, 2, 3])))
        .await;

    assert!(matches!(result, Err(RecordApiDomainError::InvalidPayload)));
}

#[tokio::test]
async fn create_rejects_empty_payloads() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_create(create_command(Some("admin"), "users", json!({})))
        .await;

    assert!(matches!(result, Err(RecordApiDomainError::InvalidPayload)));
}

#[tokio::test]
async fn create_rejects_oversized_payloads() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_create(create_command(
            Some("admin"),
            "users",
            json!({ "notes": "x".repeat(70 * 1024) }),
        ))
        .await;

    assert!(matches!(result, Err(RecordApiDomainError::PayloadTooLarge)));
}

#[tokio::test]
async fn update_rejects_hostile_column_names() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_update(update_command(
            Some("manager"),
            "work_orders",
            "wo-1",
            json!({ "status\"; drop table work_orders; --": "done" }),
        ))
        .await;

    assert!(matches!(
        result,
        Err(RecordApiDomainError::InvalidColumnName(_))
    ));
    assert_eq!(harness.repository.update_calls(), 0);
}

#[tokio::test]
async fn delete_requires_the_manager_role_for_work_orders() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_delete(delete_command(Some("technician"), "work_orders", "wo-1"))
        .await;

    match result {
        Err(RecordApiDomainError::AccessDenied(reason)) => {
            assert!(reason.contains("manager"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }
    assert_eq!(harness.repository.delete_calls(), 0);
}

#[tokio::test]
async fn delete_scopes_by_the_row_restriction() {
    let harness = create_record_api_harness();
    harness.repository.set_delete_succeeds(true);

    harness
        .command_service
        .handle_delete(delete_command(Some("manager"), "work_orders", "wo-1"))
        .await
        .expect("delete allowed");

    let criteria = harness
        .repository
        .last_delete_criteria()
        .expect("repository called");
    assert_eq!(criteria.record_id, "wo-1");
    assert_eq!(criteria.restriction.clause, "");
    assert!(!criteria.restriction.applied);
}

#[tokio::test]
async fn delete_maps_missing_rows_to_not_found() {
    let harness = create_record_api_harness();
    harness.repository.set_delete_succeeds(false);

    let result = harness
        .command_service
        .handle_delete(delete_command(Some("admin"), "work_orders", "wo-404"))
        .await;

    assert!(matches!(result, Err(RecordApiDomainError::RecordNotFound)));
}

#[tokio::test]
async fn commands_reject_resources_outside_the_catalog() {
    let harness = create_record_api_harness();

    let result = harness
        .command_service
        .handle_create(create_command(
            Some("admin"),
            "projects",
            json!({ "name": "new" }),
        ))
        .await;

    assert!(matches!(
        result,
        Err(RecordApiDomainError::ResourceNotExposed)
    ));
}
