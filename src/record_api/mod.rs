use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    authorization::interfaces::acl::authorization_facade::AuthorizationFacade,
    config::app_config::AppConfig,
    record_api::{
        application::{
            acl::authorization_gateway_impl::AuthorizationGatewayImpl,
            command_services::record_command_service_impl::RecordCommandServiceImpl,
            query_services::record_query_service_impl::RecordQueryServiceImpl,
        },
        domain::model::entities::resource_descriptor::ResourceCatalog,
        infrastructure::persistence::repositories::postgres::sqlx_record_repository_impl::SqlxRecordRepositoryImpl,
        interfaces::rest::controllers::record_api_rest_controller::{
            RecordApiRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_record_api_router(
    config: &AppConfig,
    authorization_facade: Arc<dyn AuthorizationFacade>,
) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let repository = Arc::new(SqlxRecordRepositoryImpl::new(pool));
    let catalog = Arc::new(ResourceCatalog::field_service_default());
    let authorization_gateway = Arc::new(AuthorizationGatewayImpl::new(
        authorization_facade,
        catalog.clone(),
    ));

    let command_service = Arc::new(RecordCommandServiceImpl::new(
        repository.clone(),
        authorization_gateway.clone(),
        catalog.clone(),
    ));
    let query_service = Arc::new(RecordQueryServiceImpl::new(
        repository,
        authorization_gateway,
        catalog,
    ));

    Ok(router(RecordApiRestControllerState {
        command_service,
        query_service,
    }))
}
