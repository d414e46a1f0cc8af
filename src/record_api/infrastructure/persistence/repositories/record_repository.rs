use async_trait::async_trait;
use serde_json::Value;

use crate::record_api::{
    domain::model::enums::record_api_domain_error::RecordApiDomainError,
    interfaces::acl::authorization_gateway::RowRestriction,
};

// Bind order is part of the contract: the values behind `restriction.clause`
// placeholders are bound immediately after the criteria's own binds, so the
// caller computes the restriction's param offset from the criteria shape
// (list: filters; get/delete: the id; update: payload + id).

#[derive(Clone, Debug)]
pub struct ListRecordsCriteria {
    pub table_name: String,
    pub filters: Vec<(String, String)>,
    pub order_by: Option<String>,
    pub order_desc: bool,
    pub limit: i64,
    pub offset: i64,
    pub restriction: RowRestriction,
}

#[derive(Clone, Debug)]
pub struct GetRecordCriteria {
    pub table_name: String,
    pub id_column: String,
    pub record_id: String,
    pub restriction: RowRestriction,
}

#[derive(Clone, Debug)]
pub struct CreateRecordCriteria {
    pub table_name: String,
    pub columns: Vec<String>,
    pub payload: Value,
}

#[derive(Clone, Debug)]
pub struct UpdateRecordCriteria {
    pub table_name: String,
    pub id_column: String,
    pub record_id: String,
    pub columns: Vec<String>,
    pub payload: Value,
    pub restriction: RowRestriction,
}

#[derive(Clone, Debug)]
pub struct DeleteRecordCriteria {
    pub table_name: String,
    pub id_column: String,
    pub record_id: String,
    pub restriction: RowRestriction,
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn list_records(
        &self,
        criteria: ListRecordsCriteria,
    ) -> Result<Vec<Value>, RecordApiDomainError>;

    async fn get_record(
        &self,
        criteria: GetRecordCriteria,
    ) -> Result<Option<Value>, RecordApiDomainError>;

    async fn create_record(
        &self,
        criteria: CreateRecordCriteria,
    ) -> Result<Value, RecordApiDomainError>;

    async fn update_record(
        &self,
        criteria: UpdateRecordCriteria,
    ) -> Result<Option<Value>, RecordApiDomainError>;

    async fn delete_record(
        &self,
        criteria: DeleteRecordCriteria,
    ) -> Result<bool, RecordApiDomainError>;
}
