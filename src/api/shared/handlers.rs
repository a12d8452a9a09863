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

//! Shared handler implementations used across API versions.
//!
//! Version-specific handlers wrap these with their own path annotations.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::error::{error_codes, ErrorDetail, ErrorResponse};
use super::responses::{ApiResponse, ApiVersionsResponse, HealthResponse};
use crate::api::models::{ExpandUidsRequest, LanguageDto, TableInfoDto, UidExpansionDto};
use crate::api::version::{ApiVersion, API_CURRENT_VERSION};
use crate::reference::{ReferenceCatalog, Table};

/// Upper bound on uids in one batch expansion request.
pub const MAX_EXPANSION_BATCH: usize = 1000;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// List available API versions
pub async fn list_api_versions() -> Json<ApiVersionsResponse> {
    Json(ApiVersionsResponse {
        versions: ApiVersion::all_strings(),
        current: API_CURRENT_VERSION.to_string(),
    })
}

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List supported languages in table order
pub async fn list_languages(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
) -> Json<ApiResponse<Vec<LanguageDto>>> {
    let languages = catalog
        .list_languages()
        .iter()
        .map(LanguageDto::from)
        .collect();

    Json(ApiResponse::success(languages))
}

/// Expand a single uid
pub async fn expand_uid(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Path(uid): Path<String>,
) -> Json<ApiResponse<UidExpansionDto>> {
    Json(ApiResponse::success(UidExpansionDto::expand(&catalog, &uid)))
}

/// Expand a batch of uids, preserving request order
pub async fn expand_uids(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Json(request): Json<ExpandUidsRequest>,
) -> Result<Json<ApiResponse<Vec<UidExpansionDto>>>, ApiError> {
    if request.uids.is_empty() {
        return Err(invalid_uids("At least one uid is required".to_string()));
    }

    if request.uids.len() > MAX_EXPANSION_BATCH {
        return Err(invalid_uids(format!(
            "Too many uids: {} (maximum {MAX_EXPANSION_BATCH})",
            request.uids.len()
        )));
    }

    let expansions = request
        .uids
        .iter()
        .map(|uid| UidExpansionDto::expand(&catalog, uid))
        .collect();

    Ok(Json(ApiResponse::success(expansions)))
}

fn invalid_uids(message: String) -> ApiError {
    log::debug!("Rejected uid expansion batch: {message}");
    ErrorResponse::new(error_codes::INVALID_REQUEST, message)
        .with_details(ErrorDetail {
            field: Some("uids".to_string()),
            technical_details: None,
        })
        .with_status()
}

/// Summarize every loaded reference table
pub async fn list_tables(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
) -> Json<ApiResponse<Vec<TableInfoDto>>> {
    let tables = Table::all()
        .iter()
        .map(|table| TableInfoDto::describe(&catalog, *table))
        .collect();

    Json(ApiResponse::success(tables))
}

/// Summarize one reference table by name
pub async fn get_table(
    Extension(catalog): Extension<Arc<ReferenceCatalog>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<TableInfoDto>>, ApiError> {
    let table: Table = name
        .parse()
        .map_err(|e| ErrorResponse::from(e).with_status())?;

    Ok(Json(ApiResponse::success(TableInfoDto::describe(
        &catalog, table,
    ))))
}
