use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::authorization::domain::model::{
    entities::rls_field_bindings::RlsFieldBindings,
    enums::row_security_policy::RowSecurityPolicy, value_objects::principal_id::PrincipalId,
};

lazy_static! {
    static ref SAFE_IDENTIFIER: Regex = Regex::new(r"^[a-z][a-z0-9_]{0,62}$").expect("valid regex");
}

#[derive(Clone, Debug)]
pub struct RlsContext {
    pub policy: String,
    pub principal_id: PrincipalId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RlsFilterResult {
    pub clause: String,
    pub params: Vec<String>,
    pub applied: bool,
}

impl RlsFilterResult {
    pub fn unrestricted() -> Self {
        Self {
            clause: String::new(),
            params: Vec::new(),
            applied: false,
        }
    }

    pub fn deny_all() -> Self {
        Self {
            clause: "1=0".to_string(),
            params: Vec::new(),
            applied: true,
        }
    }

    fn field_equals(field: &str, principal_id: &PrincipalId, param_offset: usize) -> Self {
        Self {
            clause: format!("{} = ${}", field, param_offset + 1),
            params: vec![principal_id.value().to_string()],
            applied: true,
        }
    }
}

pub fn build_rls_filter(
    context: Option<&RlsContext>,
    bindings: &RlsFieldBindings,
    param_offset: usize,
) -> RlsFilterResult {
    let Some(context) = context else {
        return RlsFilterResult::unrestricted();
    };

    let policy = match RowSecurityPolicy::parse(&context.policy) {
        Ok(policy) => policy,
        Err(_) => {
            warn!(
                policy = %context.policy,
                "unknown row security policy, denying all rows"
            );
            return RlsFilterResult::deny_all();
        }
    };

    let field = match policy {
        RowSecurityPolicy::AllRecords | RowSecurityPolicy::PublicResource => {
            return RlsFilterResult::unrestricted();
        }
        RowSecurityPolicy::DenyAll => return RlsFilterResult::deny_all(),
        RowSecurityPolicy::OwnRecordOnly => bindings.own_record_field.as_str(),
        RowSecurityPolicy::OwnWorkOrdersOnly
        | RowSecurityPolicy::OwnInvoicesOnly
        | RowSecurityPolicy::OwnContractsOnly => bindings.customer_field.as_str(),
        RowSecurityPolicy::AssignedWorkOrdersOnly => bindings.assigned_field.as_str(),
    };

    if !SAFE_IDENTIFIER.is_match(field) {
        warn!(
            policy = %context.policy,
            field,
            "row security field fails the identifier allow-list, denying all rows"
        );
        return RlsFilterResult::deny_all();
    }

    RlsFilterResult::field_equals(field, &context.principal_id, param_offset)
}
