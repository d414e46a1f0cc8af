use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::record_api::{
    domain::{
        model::{
            entities::resource_descriptor::ResourceCatalog,
            enums::{
                record_api_action::RecordApiAction,
                record_api_domain_error::RecordApiDomainError,
            },
            queries::{get_record_query::GetRecordQuery, list_records_query::ListRecordsQuery},
        },
        services::record_query_service::RecordQueryService,
    },
    infrastructure::persistence::repositories::record_repository::{
        GetRecordCriteria, ListRecordsCriteria, RecordRepository,
    },
    interfaces::acl::authorization_gateway::AuthorizationGateway,
};

pub struct RecordQueryServiceImpl {
    repository: Arc<dyn RecordRepository>,
    authorization_gateway: Arc<dyn AuthorizationGateway>,
    catalog: Arc<ResourceCatalog>,
}

impl RecordQueryServiceImpl {
    pub fn new(
        repository: Arc<dyn RecordRepository>,
        authorization_gateway: Arc<dyn AuthorizationGateway>,
        catalog: Arc<ResourceCatalog>,
    ) -> Self {
        Self {
            repository,
            authorization_gateway,
            catalog,
        }
    }
}

#[async_trait]
impl RecordQueryService for RecordQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListRecordsQuery,
    ) -> Result<Vec<Value>, RecordApiDomainError> {
        let resource = query.resource().value();
        let descriptor = self
            .catalog
            .descriptor(resource)
            .ok_or(RecordApiDomainError::ResourceNotExposed)?;

        self.authorization_gateway
            .ensure_permitted(query.role(), resource, RecordApiAction::Read)?;

        // User filters bind first; the restriction's placeholders continue
        // after them.
        let restriction = self.authorization_gateway.resolve_row_restriction(
            query.role(),
            resource,
            query.principal(),
            query.filters().len(),
        )?;

        let records = self
            .repository
            .list_records(ListRecordsCriteria {
                table_name: descriptor.table_name.clone(),
                filters: query.filters().to_vec(),
                order_by: query.order_by().map(str::to_string),
                order_desc: query.order_desc(),
                limit: query.limit(),
                offset: query.offset(),
                restriction,
            })
            .await?;

        Ok(self.authorization_gateway.redact_records(resource, records))
    }

    async fn handle_get(&self, query: GetRecordQuery) -> Result<Value, RecordApiDomainError> {
        let resource = query.resource().value();
        let descriptor = self
            .catalog
            .descriptor(resource)
            .ok_or(RecordApiDomainError::ResourceNotExposed)?;

        self.authorization_gateway
            .ensure_permitted(query.role(), resource, RecordApiAction::Read)?;

        let restriction = self.authorization_gateway.resolve_row_restriction(
            query.role(),
            resource,
            query.principal(),
            1,
        )?;

        let record = self
            .repository
            .get_record(GetRecordCriteria {
                table_name: descriptor.table_name.clone(),
                id_column: descriptor.id_column.clone(),
                record_id: query.record_id().value().to_string(),
                restriction,
            })
            .await?
            .ok_or(RecordApiDomainError::RecordNotFound)?;

        Ok(self.authorization_gateway.redact_record(resource, record))
    }
}
