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

//! Reference-data backend for a Buddhist text archive.
//!
//! Loads the reference tables (uid expansions, languages) from CSV at
//! startup and serves them over a small versioned REST API.

pub mod api;
pub mod config;
pub mod logging;
pub mod reference;
pub mod search;
pub mod server;

// Main exports for library users
pub use config::{load_config_file, save_config_file, ConfigError, ServerConfig};
pub use reference::{ReferenceCatalog, Table, TableError, TableSource};
pub use search::UidExpander;
pub use server::{build_router, SuttaServer};
