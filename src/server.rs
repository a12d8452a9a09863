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

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use log::info;
use std::sync::Arc;

use crate::api;
use crate::api::version::API_CURRENT_VERSION;
use crate::config::ServerConfig;
use crate::reference::{ReferenceCatalog, TableSource};

/// HTTP server over a loaded reference catalog.
pub struct SuttaServer {
    config: ServerConfig,
    catalog: Arc<ReferenceCatalog>,
}

impl SuttaServer {
    /// Validate the configuration and load every reference table.
    ///
    /// Fails if any table is missing or malformed; the server never starts
    /// with partial reference data.
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;

        let source = TableSource::new(&config.data_dir);
        let catalog = ReferenceCatalog::load(&source).with_context(|| {
            format!(
                "Failed to load reference tables from {}",
                config.data_dir.display()
            )
        })?;

        Ok(Self::from_catalog(config, catalog))
    }

    /// Create a server around an already loaded catalog.
    pub fn from_catalog(config: ServerConfig, catalog: ReferenceCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> Arc<ReferenceCatalog> {
        self.catalog.clone()
    }

    pub fn router(&self) -> Router {
        build_router(self.catalog.clone())
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.router();

        info!("Starting web API on {addr}");
        info!("API v1 available at http://{addr}/api/v1/");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutting down Sutta Server");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
    }
}

/// Build the complete application router.
pub fn build_router(catalog: Arc<ReferenceCatalog>) -> Router {
    Router::new()
        // Health check at root level (operational endpoint, not versioned)
        .route("/health", get(api::health_check))
        .route("/api/versions", get(api::list_api_versions))
        .nest(
            API_CURRENT_VERSION.path_prefix(),
            api::build_v1_router(catalog),
        )
}
