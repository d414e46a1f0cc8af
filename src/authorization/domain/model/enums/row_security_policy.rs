use super::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RowSecurityPolicy {
    AllRecords,
    PublicResource,
    OwnRecordOnly,
    OwnWorkOrdersOnly,
    OwnInvoicesOnly,
    OwnContractsOnly,
    AssignedWorkOrdersOnly,
    DenyAll,
}

impl RowSecurityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllRecords => "all_records",
            Self::PublicResource => "public_resource",
            Self::OwnRecordOnly => "own_record_only",
            Self::OwnWorkOrdersOnly => "own_work_orders_only",
            Self::OwnInvoicesOnly => "own_invoices_only",
            Self::OwnContractsOnly => "own_contracts_only",
            Self::AssignedWorkOrdersOnly => "assigned_work_orders_only",
            Self::DenyAll => "deny_all",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AuthorizationDomainError> {
        match value.trim() {
            "all_records" => Ok(Self::AllRecords),
            "public_resource" => Ok(Self::PublicResource),
            "own_record_only" => Ok(Self::OwnRecordOnly),
            "own_work_orders_only" => Ok(Self::OwnWorkOrdersOnly),
            "own_invoices_only" => Ok(Self::OwnInvoicesOnly),
            "own_contracts_only" => Ok(Self::OwnContractsOnly),
            "assigned_work_orders_only" => Ok(Self::AssignedWorkOrdersOnly),
            "deny_all" => Ok(Self::DenyAll),
            other => Err(AuthorizationDomainError::UnknownRowSecurityPolicy(
                other.to_string(),
            )),
        }
    }

    pub fn all() -> &'static [Self] {
        const VALUES: [RowSecurityPolicy; 8] = [
            RowSecurityPolicy::AllRecords,
            RowSecurityPolicy::PublicResource,
            RowSecurityPolicy::OwnRecordOnly,
            RowSecurityPolicy::OwnWorkOrdersOnly,
            RowSecurityPolicy::OwnInvoicesOnly,
            RowSecurityPolicy::OwnContractsOnly,
            RowSecurityPolicy::AssignedWorkOrdersOnly,
            RowSecurityPolicy::DenyAll,
        ];
        &VALUES
    }
}
