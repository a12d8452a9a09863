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

//! OpenAPI documentation for API v1, served at `/api/v1/openapi.json`.

use utoipa::OpenApi;

use crate::api::models::{ExpandUidsRequest, LanguageDto, TableInfoDto, UidExpansionDto};
use crate::api::shared::{
    ApiResponseSchema, ApiVersionsResponse, ErrorDetail, ErrorResponse, HealthResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_api_versions,
        super::handlers::health_check,
        super::handlers::list_languages,
        super::handlers::expand_uid,
        super::handlers::expand_uids,
        super::handlers::list_tables,
        super::handlers::get_table,
    ),
    components(
        schemas(
            HealthResponse,
            ApiResponseSchema,
            ApiVersionsResponse,
            ErrorResponse,
            ErrorDetail,
            LanguageDto,
            UidExpansionDto,
            ExpandUidsRequest,
            TableInfoDto,
        )
    ),
    tags(
        (name = "API", description = "API version information"),
        (name = "Health", description = "Health check endpoints"),
        (name = "Languages", description = "Supported languages"),
        (name = "Uids", description = "Readable expansion of text uids"),
        (name = "Reference Tables", description = "Reference data loaded at startup"),
    ),
    info(
        title = "Sutta Server API",
        version = "1.0.0",
        description = "Sutta Server REST API v1.\n\nServes the reference data of the text archive: supported languages and the expansion of compact text uids (e.g. `sn22.1-5`) into readable acronyms (`SN 22.1–5`) and names (`Saṃyutta Nikāya 22.1–5`).\n\n## API Versioning\n\nThis API uses URL-based versioning. All endpoints are prefixed with `/api/v1/`.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDocV1;
