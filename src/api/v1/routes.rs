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

//! API v1 route definitions, nested under `/api/v1/`.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use crate::reference::ReferenceCatalog;

/// Build the complete v1 API router.
pub fn build_v1_router(catalog: Arc<ReferenceCatalog>) -> Router {
    Router::new()
        .route("/languages", get(handlers::list_languages))
        .route("/uids/expansion", post(handlers::expand_uids))
        .route("/uids/:uid/expansion", get(handlers::expand_uid))
        .route("/tables", get(handlers::list_tables))
        .route("/tables/:name", get(handlers::get_table))
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(Extension(catalog))
}
