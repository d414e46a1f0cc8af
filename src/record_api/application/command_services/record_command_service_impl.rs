use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::record_api::{
    domain::{
        model::{
            commands::{
                create_record_command::CreateRecordCommand,
                delete_record_command::DeleteRecordCommand,
                update_record_command::UpdateRecordCommand,
            },
            entities::resource_descriptor::{ResourceCatalog, ResourceDescriptor},
            enums::{
                record_api_action::RecordApiAction,
                record_api_domain_error::RecordApiDomainError,
            },
        },
        services::record_command_service::RecordCommandService,
    },
    infrastructure::persistence::repositories::record_repository::{
        CreateRecordCriteria, DeleteRecordCriteria, RecordRepository, UpdateRecordCriteria,
    },
    interfaces::acl::authorization_gateway::AuthorizationGateway,
};

const MAX_PAYLOAD_BYTES: usize = 64 * 1024;

pub struct RecordCommandServiceImpl {
    repository: Arc<dyn RecordRepository>,
    authorization_gateway: Arc<dyn AuthorizationGateway>,
    catalog: Arc<ResourceCatalog>,
}

impl RecordCommandServiceImpl {
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

    fn ensure_payload_size(payload: &Value) -> Result<(), RecordApiDomainError> {
        if payload.to_string().len() > MAX_PAYLOAD_BYTES {
            return Err(RecordApiDomainError::PayloadTooLarge);
        }

        Ok(())
    }

    fn payload_columns(payload: &Value) -> Result<Vec<String>, RecordApiDomainError> {
        let object = payload
            .as_object()
            .ok_or(RecordApiDomainError::InvalidPayload)?;

        if object.is_empty() {
            return Err(RecordApiDomainError::InvalidPayload);
        }

        Ok(object.keys().cloned().collect())
    }

    fn ensure_valid_columns(columns: &[String]) -> Result<(), RecordApiDomainError> {
        for column in columns {
            let valid = !column.is_empty()
                && column
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if !valid {
                return Err(RecordApiDomainError::InvalidColumnName(column.clone()));
            }
        }

        Ok(())
    }

    fn ensure_mutable_columns(
        descriptor: &ResourceDescriptor,
        columns: &[String],
    ) -> Result<(), RecordApiDomainError> {
        for column in columns {
            if descriptor.immutable_fields.contains(column) {
                return Err(RecordApiDomainError::ImmutableFieldViolation(column.clone()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl RecordCommandService for RecordCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateRecordCommand,
    ) -> Result<Value, RecordApiDomainError> {
        let resource = command.resource().value();
        let descriptor = self
            .catalog
            .descriptor(resource)
            .ok_or(RecordApiDomainError::ResourceNotExposed)?;

        Self::ensure_payload_size(command.payload())?;
        let columns = Self::payload_columns(command.payload())?;
        Self::ensure_valid_columns(&columns)?;

        self.authorization_gateway
            .ensure_permitted(command.role(), resource, RecordApiAction::Create)?;

        let record = self
            .repository
            .create_record(CreateRecordCriteria {
                table_name: descriptor.table_name.clone(),
                columns,
                payload: command.payload().clone(),
            })
            .await?;

        Ok(self.authorization_gateway.redact_record(resource, record))
    }

    async fn handle_update(
        &self,
        command: UpdateRecordCommand,
    ) -> Result<Value, RecordApiDomainError> {
        let resource = command.resource().value();
        let descriptor = self
            .catalog
            .descriptor(resource)
            .ok_or(RecordApiDomainError::ResourceNotExposed)?;

        Self::ensure_payload_size(command.payload())?;
        let columns = Self::payload_columns(command.payload())?;
        Self::ensure_valid_columns(&columns)?;
        Self::ensure_mutable_columns(descriptor, &columns)?;

        self.authorization_gateway
            .ensure_permitted(command.role(), resource, RecordApiAction::Update)?;

        // Payload binds at $1 and the id at $2, so the restriction starts at $3.
        let restriction = self.authorization_gateway.resolve_row_restriction(
            command.role(),
            resource,
            command.principal(),
            2,
        )?;

        let record = self
            .repository
            .update_record(UpdateRecordCriteria {
                table_name: descriptor.table_name.clone(),
                id_column: descriptor.id_column.clone(),
                record_id: command.record_id().value().to_string(),
                columns,
                payload: command.payload().clone(),
                restriction,
            })
            .await?
            .ok_or(RecordApiDomainError::RecordNotFound)?;

        Ok(self.authorization_gateway.redact_record(resource, record))
    }

    async fn handle_delete(
        &self,
        command: DeleteRecordCommand,
    ) -> Result<(), RecordApiDomainError> {
        let resource = command.resource().value();
        let descriptor = self
            .catalog
            .descriptor(resource)
            .ok_or(RecordApiDomainError::ResourceNotExposed)?;

        self.authorization_gateway
            .ensure_permitted(command.role(), resource, RecordApiAction::Delete)?;

        let restriction = self.authorization_gateway.resolve_row_restriction(
            command.role(),
            resource,
            command.principal(),
            1,
        )?;

        let deleted = self
            .repository
            .delete_record(DeleteRecordCriteria {
                table_name: descriptor.table_name.clone(),
                id_column: descriptor.id_column.clone(),
                record_id: command.record_id().value().to_string(),
                restriction,
            })
            .await?;

        if !deleted {
            return Err(RecordApiDomainError::RecordNotFound);
        }

        Ok(())
    }
}
