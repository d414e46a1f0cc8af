use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::record_api::{
    domain::{
        model::{
            commands::{
                create_record_command::{CreateRecordCommand, CreateRecordCommandParts},
                delete_record_command::{DeleteRecordCommand, DeleteRecordCommandParts},
                update_record_command::{UpdateRecordCommand, UpdateRecordCommandParts},
            },
            enums::record_api_domain_error::RecordApiDomainError,
            queries::{
                get_record_query::{GetRecordQuery, GetRecordQueryParts},
                list_records_query::{ListRecordsQuery, ListRecordsQueryParts},
            },
        },
        services::{
            record_command_service::RecordCommandService,
            record_query_service::RecordQueryService,
        },
    },
    interfaces::rest::resources::{
        record_api_error_response_resource::RecordApiErrorResponseResource,
        record_payload_resource::RecordPayloadResource,
    },
};

#[derive(Clone)]
pub struct RecordApiRestControllerState {
    pub command_service: Arc<dyn RecordCommandService>,
    pub query_service: Arc<dyn RecordQueryService>,
}

pub fn router(state: RecordApiRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/:resource", get(list_records))
        .route("/api/v1/:resource", post(create_record))
        .route("/api/v1/:resource/:record_id", get(get_record))
        .route("/api/v1/:resource/:record_id", patch(update_record))
        .route("/api/v1/:resource/:record_id", delete(delete_record))
        .with_state(state)
}

struct RequestIdentity {
    principal: String,
    role: Option<String>,
    request_id: String,
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_identity(
    headers: &HeaderMap,
) -> Result<RequestIdentity, (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let principal = header_value(headers, "x-user-id")
        .ok_or_else(|| map_domain_error(RecordApiDomainError::MissingAuthentication))?;

    Ok(RequestIdentity {
        principal,
        role: header_value(headers, "x-user-role"),
        request_id: header_value(headers, "x-request-id")
            .unwrap_or_else(|| Uuid::now_v7().to_string()),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/{resource}",
    tag = "record-api",
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("x-user-id" = String, Header, description = "Authenticated user id"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated role"),
        ("x-request-id" = Option<String>, Header, description = "Correlation id"),
        ("limit" = Option<i64>, Query, description = "Page size (1-200, default 50)"),
        ("offset" = Option<i64>, Query, description = "Page offset"),
        ("order_by" = Option<String>, Query, description = "Order column"),
        ("order_dir" = Option<String>, Query, description = "asc or desc"),
    ),
    responses(
        (status = 200, description = "Visible records", body = [serde_json::Value]),
        (status = 400, description = "Invalid request", body = RecordApiErrorResponseResource),
        (status = 401, description = "Missing identity", body = RecordApiErrorResponseResource),
        (status = 403, description = "Denied", body = RecordApiErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RecordApiErrorResponseResource)
    )
)]
pub async fn list_records(
    State(state): State<RecordApiRestControllerState>,
    Path(resource): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let identity = parse_identity(&headers)?;

    let mut limit = None;
    let mut offset = None;
    let mut order_by = None;
    let mut order_desc = false;
    let mut filters = Vec::new();
    for (key, value) in params {
        match key.as_str() {
            "limit" => {
                limit = Some(value.parse::<i64>().map_err(|_| {
                    map_domain_error(RecordApiDomainError::InvalidQueryParameters)
                })?);
            }
            "offset" => {
                offset = Some(value.parse::<i64>().map_err(|_| {
                    map_domain_error(RecordApiDomainError::InvalidQueryParameters)
                })?);
            }
            "order_by" => order_by = Some(value),
            "order_dir" => order_desc = value.eq_ignore_ascii_case("desc"),
            _ => filters.push((key, value)),
        }
    }

    let query = ListRecordsQuery::new(ListRecordsQueryParts {
        principal: identity.principal.clone(),
        role: identity.role.clone(),
        resource: resource.clone(),
        filters,
        order_by,
        order_desc,
        limit,
        offset,
    })
    .map_err(map_domain_error)?;

    let records = state
        .query_service
        .handle_list(query)
        .await
        .map_err(|error| map_request_error(error, &identity.request_id, &resource))?;

    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/v1/{resource}/{record_id}",
    tag = "record-api",
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("record_id" = String, Path, description = "Record id"),
        ("x-user-id" = String, Header, description = "Authenticated user id"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated role"),
        ("x-request-id" = Option<String>, Header, description = "Correlation id"),
    ),
    responses(
        (status = 200, description = "Record", body = serde_json::Value),
        (status = 400, description = "Invalid request", body = RecordApiErrorResponseResource),
        (status = 401, description = "Missing identity", body = RecordApiErrorResponseResource),
        (status = 403, description = "Denied", body = RecordApiErrorResponseResource),
        (status = 404, description = "Not found", body = RecordApiErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RecordApiErrorResponseResource)
    )
)]
pub async fn get_record(
    State(state): State<RecordApiRestControllerState>,
    Path((resource, record_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let identity = parse_identity(&headers)?;

    let query = GetRecordQuery::new(GetRecordQueryParts {
        principal: identity.principal.clone(),
        role: identity.role.clone(),
        resource: resource.clone(),
        record_id,
    })
    .map_err(map_domain_error)?;

    let record = state
        .query_service
        .handle_get(query)
        .await
        .map_err(|error| map_request_error(error, &identity.request_id, &resource))?;

    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/api/v1/{resource}",
    tag = "record-api",
    request_body = RecordPayloadResource,
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("x-user-id" = String, Header, description = "Authenticated user id"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated role"),
        ("x-request-id" = Option<String>, Header, description = "Correlation id"),
    ),
    responses(
        (status = 201, description = "Created record", body = serde_json::Value),
        (status = 400, description = "Invalid request", body = RecordApiErrorResponseResource),
        (status = 401, description = "Missing identity", body = RecordApiErrorResponseResource),
        (status = 403, description = "Denied", body = RecordApiErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RecordApiErrorResponseResource)
    )
)]
pub async fn create_record(
    State(state): State<RecordApiRestControllerState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(request): Json<RecordPayloadResource>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let identity = parse_identity(&headers)?;

    if request.validate().is_err() {
        return Err(map_domain_error(RecordApiDomainError::InvalidPayload));
    }

    let command = CreateRecordCommand::new(CreateRecordCommandParts {
        principal: identity.principal.clone(),
        role: identity.role.clone(),
        resource: resource.clone(),
        payload: request.payload,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_create(command)
        .await
        .map_err(|error| map_request_error(error, &identity.request_id, &resource))?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/{resource}/{record_id}",
    tag = "record-api",
    request_body = RecordPayloadResource,
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("record_id" = String, Path, description = "Record id"),
        ("x-user-id" = String, Header, description = "Authenticated user id"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated role"),
        ("x-request-id" = Option<String>, Header, description = "Correlation id"),
    ),
    responses(
        (status = 200, description = "Updated record", body = serde_json::Value),
        (status = 400, description = "Invalid request", body = RecordApiErrorResponseResource),
        (status = 401, description = "Missing identity", body = RecordApiErrorResponseResource),
        (status = 403, description = "Denied", body = RecordApiErrorResponseResource),
        (status = 404, description = "Not found", body = RecordApiErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RecordApiErrorResponseResource)
    )
)]
pub async fn update_record(
    State(state): State<RecordApiRestControllerState>,
    Path((resource, record_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(request): Json<RecordPayloadResource>,
) -> Result<Json<Value>, (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let identity = parse_identity(&headers)?;

    if request.validate().is_err() {
        return Err(map_domain_error(RecordApiDomainError::InvalidPayload));
    }

    let command = UpdateRecordCommand::new(UpdateRecordCommandParts {
        principal: identity.principal.clone(),
        role: identity.role.clone(),
        resource: resource.clone(),
        record_id,
        payload: request.payload,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_update(command)
        .await
        .map_err(|error| map_request_error(error, &identity.request_id, &resource))?;

    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/v1/{resource}/{record_id}",
    tag = "record-api",
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("record_id" = String, Path, description = "Record id"),
        ("x-user-id" = String, Header, description = "Authenticated user id"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated role"),
        ("x-request-id" = Option<String>, Header, description = "Correlation id"),
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 400, description = "Invalid request", body = RecordApiErrorResponseResource),
        (status = 401, description = "Missing identity", body = RecordApiErrorResponseResource),
        (status = 403, description = "Denied", body = RecordApiErrorResponseResource),
        (status = 404, description = "Not found", body = RecordApiErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RecordApiErrorResponseResource)
    )
)]
pub async fn delete_record(
    State(state): State<RecordApiRestControllerState>,
    Path((resource, record_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<RecordApiErrorResponseResource>)> {
    let identity = parse_identity(&headers)?;

    let command = DeleteRecordCommand::new(DeleteRecordCommandParts {
        principal: identity.principal.clone(),
        role: identity.role.clone(),
        resource: resource.clone(),
        record_id,
    })
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(|error| map_request_error(error, &identity.request_id, &resource))?;

    Ok(StatusCode::NO_CONTENT)
}

fn map_request_error(
    error: RecordApiDomainError,
    request_id: &str,
    resource: &str,
) -> (StatusCode, Json<RecordApiErrorResponseResource>) {
    if let RecordApiDomainError::AccessDenied(reason) = &error {
        warn!(request_id, resource, reason = %reason, "record request denied");
    }
    map_domain_error(error)
}

fn map_domain_error(
    error: RecordApiDomainError,
) -> (StatusCode, Json<RecordApiErrorResponseResource>) {
    let (status, code) = match &error {
        RecordApiDomainError::InvalidPrincipalId
        | RecordApiDomainError::InvalidResourceName
        | RecordApiDomainError::InvalidRecordIdentifier => {
            (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
        }
        RecordApiDomainError::InvalidColumnName(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_COLUMN_NAME")
        }
        RecordApiDomainError::InvalidPayload => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
        RecordApiDomainError::PayloadTooLarge => (StatusCode::BAD_REQUEST, "PAYLOAD_TOO_LARGE"),
        RecordApiDomainError::InvalidQueryParameters => {
            (StatusCode::BAD_REQUEST, "INVALID_QUERY_PARAMETERS")
        }
        RecordApiDomainError::ImmutableFieldViolation(_) => {
            (StatusCode::BAD_REQUEST, "IMMUTABLE_FIELD_VIOLATION")
        }
        RecordApiDomainError::MissingAuthentication => {
            (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED")
        }
        RecordApiDomainError::AccessDenied(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        RecordApiDomainError::ResourceNotExposed => {
            (StatusCode::FORBIDDEN, "RESOURCE_NOT_EXPOSED")
        }
        RecordApiDomainError::RecordNotFound => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
        RecordApiDomainError::InfrastructureError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
        }
    };

    (
        status,
        Json(RecordApiErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
