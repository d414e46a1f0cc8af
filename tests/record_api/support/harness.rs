use std::sync::Arc;

use fieldserve_api::{
    authorization::{
        build_authorization_facade, domain::model::entities::permission_matrix::PermissionMatrix,
    },
    record_api::{
        application::{
            acl::authorization_gateway_impl::AuthorizationGatewayImpl,
            command_services::record_command_service_impl::RecordCommandServiceImpl,
            query_services::record_query_service_impl::RecordQueryServiceImpl,
        },
        domain::model::entities::resource_descriptor::ResourceCatalog,
    },
};

use super::fakes::FakeRecordRepository;

pub struct RecordApiHarness {
    pub repository: Arc<FakeRecordRepository>,
    pub command_service: RecordCommandServiceImpl,
    pub query_service: RecordQueryServiceImpl,
}

pub fn create_record_api_harness() -> RecordApiHarness {
    create_record_api_harness_with_matrix(
        PermissionMatrix::built_in().expect("valid built-in matrix"),
    )
}

pub fn create_record_api_harness_with_matrix(matrix: PermissionMatrix) -> RecordApiHarness {
    let facade = build_authorization_facade(Arc::new(matrix));
    let catalog = Arc::new(ResourceCatalog::field_service_default());
    let authorization_gateway = Arc::new(AuthorizationGatewayImpl::new(facade, catalog.clone()));
    let repository = Arc::new(FakeRecordRepository::new());

    let command_service = RecordCommandServiceImpl::new(
        repository.clone(),
        authorization_gateway.clone(),
        catalog.clone(),
    );
    let query_service =
        RecordQueryServiceImpl::new(repository.clone(), authorization_gateway, catalog);

    RecordApiHarness {
        repository,
        command_service,
        query_service,
    }
}
