use fieldserve_api::authorization::domain::{
    model::enums::operation_kind::OperationKind,
    services::permission_evaluator::PermissionEvaluator,
};

use crate::support::{evaluator, field_service_matrix};

#[test]
fn admin_may_delete_users() {
    let evaluator = evaluator();

    assert!(evaluator.has_permission(Some("admin"), "users", OperationKind::Delete));
}

#[test]
fn manager_may_not_delete_users() {
    let evaluator = evaluator();

    assert!(!evaluator.has_permission(Some("manager"), "users", OperationKind::Delete));

    let decision = evaluator.check_permission(Some("manager"), "users", OperationKind::Delete);
    assert!(!decision.allowed);
    let reason = decision.denial_reason.expect("denial reason");
    assert!(reason.contains("manager"));
    assert!(reason.contains("delete"));
    assert!(reason.contains("users"));
    assert_eq!(
        decision.minimum_required.expect("minimum role").name,
        "admin"
    );
}

#[test]
fn client_denial_names_the_required_role() {
    let evaluator = evaluator();

    let decision = evaluator.check_permission(Some("client"), "users", OperationKind::Delete);
    assert!(!decision.allowed);
    assert!(decision.denial_reason.expect("denial reason").contains("admin"));
}

#[test]
fn missing_role_denies_with_no_role_assigned() {
    let evaluator = evaluator();

    for role in [None, Some(""), Some("   ")] {
        let decision = evaluator.check_permission(role, "work_orders", OperationKind::Read);
        assert!(!decision.allowed);
        assert!(
            decision
                .denial_reason
                .expect("denial reason")
                .contains("No role")
        );
        assert!(decision.minimum_required.is_none());
    }
}

#[test]
fn unrecognized_role_denies_with_unknown_role() {
    let evaluator = evaluator();

    assert!(!evaluator.has_permission(Some("bogus-role"), "work_orders", OperationKind::Read));

    let decision =
        evaluator.check_permission(Some("bogus-role"), "work_orders", OperationKind::Read);
    let reason = decision.denial_reason.expect("denial reason");
    assert!(reason.contains("Unknown role"));
    assert!(reason.contains("bogus-role"));
}

#[test]
fn role_comparison_is_case_insensitive() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    for resource in matrix.resource_names() {
        for operation in OperationKind::all() {
            let lower = evaluator.has_permission(Some("admin"), resource, *operation);
            let upper = evaluator.has_permission(Some("ADMIN"), resource, *operation);
            let mixed = evaluator.has_permission(Some("Admin"), resource, *operation);
            assert_eq!(lower, upper);
            assert_eq!(lower, mixed);
        }
    }
}

#[test]
fn every_role_may_read_work_orders() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    for role in matrix.roles() {
        assert!(
            evaluator
                .allowed_operations(Some(&role.name), "work_orders")
                .contains(&OperationKind::Read),
            "{} should read work orders",
            role.name
        );
    }
}

#[test]
fn higher_priority_roles_hold_permission_supersets() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    for resource in matrix.resource_names() {
        for operation in OperationKind::all() {
            for lower in matrix.roles() {
                for higher in matrix.roles() {
                    if higher.priority < lower.priority {
                        continue;
                    }
                    if evaluator.has_permission(Some(&lower.name), resource, *operation) {
                        assert!(
                            evaluator.has_permission(Some(&higher.name), resource, *operation),
                            "{} allowed but {} denied for {resource}/{}",
                            lower.name,
                            higher.name,
                            operation.as_str()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn evaluator_methods_agree_with_each_other() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    let mut roles = matrix
        .roles()
        .iter()
        .map(|role| Some(role.name.clone()))
        .collect::<Vec<_>>();
    roles.push(Some("bogus-role".to_string()));
    roles.push(None);

    for role in &roles {
        for resource in matrix.resource_names() {
            let allowed = evaluator.allowed_operations(role.as_deref(), resource);
            assert_eq!(
                evaluator.can_access_resource(role.as_deref(), resource),
                !allowed.is_empty()
            );
            for operation in OperationKind::all() {
                assert_eq!(
                    allowed.contains(operation),
                    evaluator.has_permission(role.as_deref(), resource, *operation)
                );
            }
        }
    }
}

#[test]
fn the_highest_priority_role_is_allowed_everything() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    let admin = matrix.roles().last().expect("non-empty role set");
    for resource in matrix.resource_names() {
        for operation in OperationKind::all() {
            assert!(
                evaluator.has_permission(Some(&admin.name), resource, *operation),
                "{} denied for {resource}/{}",
                admin.name,
                operation.as_str()
            );
        }
    }
}

#[test]
fn the_lowest_priority_role_is_allowed_exactly_the_lowest_thresholds() {
    let evaluator = evaluator();
    let matrix = field_service_matrix();

    let client = matrix.roles().first().expect("non-empty role set");
    for resource in matrix.resource_names() {
        for operation in OperationKind::all() {
            let rule = matrix
                .permission_rule(resource, *operation)
                .expect("rule defined");
            assert_eq!(
                evaluator.has_permission(Some(&client.name), resource, *operation),
                rule.minimum_priority == client.priority,
                "lowest-role mismatch for {resource}/{}",
                operation.as_str()
            );
        }
    }
}

#[test]
fn allowed_operations_keeps_the_canonical_order() {
    let evaluator = evaluator();

    assert_eq!(
        evaluator.allowed_operations(Some("dispatcher"), "work_orders"),
        vec![
            OperationKind::Create,
            OperationKind::Read,
            OperationKind::Update
        ]
    );
    assert!(evaluator.allowed_operations(None, "work_orders").is_empty());
}

#[test]
fn unknown_resources_resolve_to_deny_not_panic() {
    let evaluator = evaluator();

    assert!(!evaluator.has_permission(Some("admin"), "reports", OperationKind::Read));
    assert!(evaluator.minimum_role("reports", OperationKind::Read).is_none());
    assert!(!evaluator.can_access_resource(Some("admin"), "reports"));

    let decision = evaluator.check_permission(Some("admin"), "reports", OperationKind::Read);
    assert!(!decision.allowed);
    assert!(decision.denial_reason.expect("denial reason").contains("reports"));
}

#[test]
fn minimum_role_reports_the_configured_threshold() {
    let evaluator = evaluator();

    let minimum = evaluator
        .minimum_role("users", OperationKind::Delete)
        .expect("configured rule");
    assert_eq!(minimum.name, "admin");
    assert_eq!(minimum.priority, 5);
}

#[test]
fn has_minimum_role_wraps_the_hierarchy() {
    let evaluator = evaluator();

    assert!(evaluator.has_minimum_role(Some("manager"), "technician"));
    assert!(evaluator.has_minimum_role(Some("Manager"), "MANAGER"));
    assert!(!evaluator.has_minimum_role(Some("technician"), "manager"));
    assert!(!evaluator.has_minimum_role(None, "client"));
    assert!(!evaluator.has_minimum_role(Some("bogus-role"), "client"));
}
