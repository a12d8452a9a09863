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

//! Shared fixtures for integration tests.
//!
//! Each fixture writes a small reference table directory into a fresh
//! `TempDir`; keep the `TempDir` alive for as long as the files are needed.

use axum::Router;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use sutta_server::{build_router, ReferenceCatalog, TableSource};
use tempfile::TempDir;

/// `dn` appears twice; the second row must win.
/// `kp` has an empty acronym and expands to `KP`.
pub const UID_EXPANSION_CSV: &str = "\
uid,acro,name
dn,DN,Long Discourses
mn,MN,Majjhima Nikāya
sn,SN,Saṃyutta Nikāya
an,AN,Aṅguttara Nikāya
dhp,Dhp,Dhammapada
kp,,Khuddakapāṭha
pli,Pli,Pāli
tv,TV,Theravāda Vinaya
dn,DN,Dīgha Nikāya
";

pub const LANGUAGE_CSV: &str = "\
uid,name,iso_code,is_root,localized
en,English,en,false,yes
pli,Pali,pi,true,
lzh,Literary Chinese,lzh,TRUE,0
de,German,de,no,1
";

/// Write both reference tables into `dir`.
pub fn write_reference_tables(dir: &Path) {
    fs::write(dir.join("uid_expansion.csv"), UID_EXPANSION_CSV).unwrap();
    fs::write(dir.join("language.csv"), LANGUAGE_CSV).unwrap();
}

/// A temp directory holding the standard fixture tables.
pub fn reference_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_reference_tables(dir.path());
    dir
}

/// Load the standard fixture tables into a catalog.
pub fn fixture_catalog() -> ReferenceCatalog {
    let dir = reference_dir();
    ReferenceCatalog::load(&TableSource::new(dir.path())).unwrap()
}

/// Full application router over the fixture catalog.
pub fn create_test_router() -> Router {
    build_router(Arc::new(fixture_catalog()))
}
