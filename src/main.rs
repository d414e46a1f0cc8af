use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use fieldserve_api::{
    authorization::{
        build_authorization_facade, build_authorization_router,
        interfaces::rest::resources::{
            allowed_operations_resource::AllowedOperationsResponseResource,
            authorization_error_response_resource::AuthorizationErrorResponseResource,
            check_permission_request_resource::{
                CheckPermissionRequestResource, CheckPermissionResponseResource,
            },
            permission_matrix_resource::{
                MatrixOperationRuleResource, MatrixResourceRulesResource, MatrixRoleResource,
                PermissionMatrixResource,
            },
        },
        load_permission_matrix,
    },
    config::app_config::AppConfig,
    record_api::{
        build_record_api_router,
        interfaces::rest::resources::{
            record_api_error_response_resource::RecordApiErrorResponseResource,
            record_auth_headers_resource::RecordAuthHeadersResource,
            record_list_query_resource::RecordListQueryResource,
            record_payload_resource::RecordPayloadResource,
        },
    },
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        fieldserve_api::authorization::interfaces::rest::controllers::authorization_rest_controller::check_permission,
        fieldserve_api::authorization::interfaces::rest::controllers::authorization_rest_controller::list_allowed_operations,
        fieldserve_api::authorization::interfaces::rest::controllers::authorization_rest_controller::export_permission_matrix,
        fieldserve_api::record_api::interfaces::rest::controllers::record_api_rest_controller::list_records,
        fieldserve_api::record_api::interfaces::rest::controllers::record_api_rest_controller::get_record,
        fieldserve_api::record_api::interfaces::rest::controllers::record_api_rest_controller::create_record,
        fieldserve_api::record_api::interfaces::rest::controllers::record_api_rest_controller::update_record,
        fieldserve_api::record_api::interfaces::rest::controllers::record_api_rest_controller::delete_record
    ),
    components(
        schemas(
            CheckPermissionRequestResource,
            CheckPermissionResponseResource,
            AllowedOperationsResponseResource,
            PermissionMatrixResource,
            MatrixRoleResource,
            MatrixResourceRulesResource,
            MatrixOperationRuleResource,
            AuthorizationErrorResponseResource,
            RecordAuthHeadersResource,
            RecordListQueryResource,
            RecordPayloadResource,
            RecordApiErrorResponseResource
        )
    ),
    tags(
        (name = "authorization", description = "Role hierarchy and permission matrix evaluation"),
        (name = "record-api", description = "Field-service record CRUD with row-level security")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let matrix = Arc::new(
        load_permission_matrix(&config).expect("permission matrix failed validation at startup"),
    );
    tracing::info!(version = matrix.version(), "permission matrix loaded");

    let authorization_router = build_authorization_router(matrix.clone());
    let authorization_facade = build_authorization_facade(matrix);
    let record_api_router = build_record_api_router(&config, authorization_facade)
        .await
        .expect("failed to build record api router");

    let app = Router::new()
        .merge(authorization_router)
        .merge(record_api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "fieldserve api listening");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
