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

//! Data Transfer Objects (DTOs) for API requests and responses.
//!
//! DTOs serialize with camelCase field names and are kept separate from the
//! reference row types so the CSV column names never leak into the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reference::{LanguageRecord, ReferenceCatalog, Table};

/// A supported language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    /// Language code used in text uids (e.g. `pli`)
    pub uid: String,
    /// English name of the language
    pub name: String,
    /// ISO 639 code, empty when there is none
    pub iso_code: String,
    /// Whether root (original) texts are in this language
    pub is_root: bool,
    /// Whether the interface is translated into this language
    pub localized: bool,
}

impl From<&LanguageRecord> for LanguageDto {
    fn from(record: &LanguageRecord) -> Self {
        Self {
            uid: record.uid.clone(),
            name: record.name.clone(),
            iso_code: record.iso_code.clone(),
            is_root: record.is_root,
            localized: record.localized,
        }
    }
}

/// Both readable forms of a uid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UidExpansionDto {
    /// The uid as requested
    pub uid: String,
    /// Acronym form, e.g. `SN 22.1–5`
    pub acronym: String,
    /// Display-name form, e.g. `Saṃyutta Nikāya 22.1–5`
    pub name: String,
}

impl UidExpansionDto {
    pub fn expand(catalog: &ReferenceCatalog, uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            acronym: catalog.expand_uid_to_acronym(uid),
            name: catalog.expand_uid_to_name(uid),
        }
    }
}

/// Request body for expanding several uids at once
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpandUidsRequest {
    /// uids to expand, answered in the same order
    pub uids: Vec<String>,
}

/// Summary of one loaded reference table
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableInfoDto {
    /// Table name, e.g. `uid_expansion`
    pub name: String,
    /// Number of entries held in memory
    pub entry_count: usize,
}

impl TableInfoDto {
    pub fn describe(catalog: &ReferenceCatalog, table: Table) -> Self {
        Self {
            name: table.name().to_string(),
            entry_count: catalog.entry_count(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_dto_serializes_camelcase() {
        let record = LanguageRecord {
            uid: "pli".to_string(),
            name: "Pali".to_string(),
            iso_code: "pi".to_string(),
            is_root: true,
            localized: false,
        };

        let json = serde_json::to_value(LanguageDto::from(&record)).unwrap();
        assert_eq!(
            json,
            json!({
                "uid": "pli",
                "name": "Pali",
                "isoCode": "pi",
                "isRoot": true,
                "localized": false
            })
        );
    }

    #[test]
    fn test_table_info_serializes_camelcase() {
        let json = serde_json::to_value(TableInfoDto {
            name: "language".to_string(),
            entry_count: 3,
        })
        .unwrap();
        assert_eq!(json["entryCount"], 3);
        assert!(json.get("entry_count").is_none());
    }
}
