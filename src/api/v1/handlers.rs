// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! API v1 handler functions with OpenAPI documentation.
//!
//! These handlers wrap the shared handler implementations with v1-specific
//! path annotations. The logic lives in the shared handlers module.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::openapi::ApiDocV1;
use crate::api::models::{ExpandUidsRequest, LanguageDto, TableInfoDto, UidExpansionDto};
use crate::api::shared::handlers::ApiError;
use crate::api::shared::{ApiResponse, ApiVersionsResponse, ErrorResponse, HealthResponse};
use crate::reference::ReferenceCatalog;

use crate::api::shared::handlers as shared;

/// List available API versions
#[utoipa::path(
    get,
    path = "/api/versions",
    responses(
        (status = 200, description = "List of available API versions", body = ApiVersionsResponse),
    ),
    tag = "API"
)]
pub async fn list_api_versions() -> Json<ApiVersionsResponse> {
    shared::list_api_versions().await
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    shared::health_check().await
}

/// List supported languages
#[utoipa::path(
    get,
    path = "/api/v1/languages",
    responses(
        (status = 200, description = "Languages in reference table order", body = ApiResponse),
    ),
    tag = "Languages"
)]
pub async fn list_languages(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
) -> Json<ApiResponse<Vec<LanguageDto>>> {
    shared::list_languages(Extension(catalog)).await
}

/// Expand a uid into its acronym and display-name forms
#[utoipa::path(
    get,
    path = "/api/v1/uids/{uid}/expansion",
    params(
        ("uid" = String, Path, description = "Text uid, e.g. sn22.1-5")
    ),
    responses(
        (status = 200, description = "Expanded uid", body = ApiResponse),
    ),
    tag = "Uids"
)]
pub async fn expand_uid(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Path(uid): Path<String>,
) -> Json<ApiResponse<UidExpansionDto>> {
    shared::expand_uid(Extension(catalog), Path(uid)).await
}

/// Expand several uids at once
#[utoipa::path(
    post,
    path = "/api/v1/uids/expansion",
    request_body = ExpandUidsRequest,
    responses(
        (status = 200, description = "Expanded uids in request order", body = ApiResponse),
        (status = 400, description = "Empty or oversized uid list", body = ErrorResponse),
    ),
    tag = "Uids"
)]
pub async fn expand_uids(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Json(request): Json<ExpandUidsRequest>,
) -> Result<Json<ApiResponse<Vec<UidExpansionDto>>>, ApiError> {
    shared::expand_uids(Extension(catalog), Json(request)).await
}

/// List loaded reference tables
#[utoipa::path(
    get,
    path = "/api/v1/tables",
    responses(
        (status = 200, description = "Loaded reference tables", body = ApiResponse),
    ),
    tag = "Reference Tables"
)]
pub async fn list_tables(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
) -> Json<ApiResponse<Vec<TableInfoDto>>> {
    shared::list_tables(Extension(catalog)).await
}

/// Describe one reference table
#[utoipa::path(
    get,
    path = "/api/v1/tables/{name}",
    params(
        ("name" = String, Path, description = "Table name: uid_expansion or language")
    ),
    responses(
        (status = 200, description = "Table summary", body = ApiResponse),
        (status = 404, description = "Unknown table", body = ErrorResponse),
    ),
    tag = "Reference Tables"
)]
pub async fn get_table(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<TableInfoDto>>, ApiError> {
    shared::get_table(Extension(catalog), Path(name)).await
}

/// OpenAPI document for this version
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDocV1::openapi())
}
