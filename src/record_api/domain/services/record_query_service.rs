use async_trait::async_trait;
use serde_json::Value;

use crate::record_api::domain::model::{
    enums::record_api_domain_error::RecordApiDomainError,
    queries::{get_record_query::GetRecordQuery, list_records_query::ListRecordsQuery},
};

#[async_trait]
pub trait RecordQueryService: Send + Sync {
    async fn handle_list(&self, query: ListRecordsQuery)
    -> Result<Vec<Value>, RecordApiDomainError>;

    async fn handle_get(&self, query: GetRecordQuery) -> Result<Value, RecordApiDomainError>;
}
