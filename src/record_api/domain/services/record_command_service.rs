use async_trait::async_trait;
use serde_json::Value;

use crate::record_api::domain::model::{
    commands::{
        create_record_command::CreateRecordCommand, delete_record_command::DeleteRecordCommand,
        update_record_command::UpdateRecordCommand,
    },
    enums::record_api_domain_error::RecordApiDomainError,
};

#[async_trait]
pub trait RecordCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateRecordCommand,
    ) -> Result<Value, RecordApiDomainError>;

    async fn handle_update(
        &self,
        command: UpdateRecordCommand,
    ) -> Result<Value, RecordApiDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteRecordCommand,
    ) -> Result<(), RecordApiDomainError>;
}
