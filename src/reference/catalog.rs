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

use log::info;

use super::rows::LanguageRecord;
use super::tables::{Table, TableError, TableSource};
use crate::search::UidExpander;

/// Everything loaded from the reference tables.
///
/// Built once before the server starts and read-only afterwards; share it
/// behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    expander: UidExpander,
    languages: Vec<LanguageRecord>,
}

impl ReferenceCatalog {
    pub fn new(expander: UidExpander, languages: Vec<LanguageRecord>) -> Self {
        Self {
            expander,
            languages,
        }
    }

    /// Load every table from `source`. Any missing or malformed table fails
    /// the whole load.
    pub fn load(source: &TableSource) -> Result<Self, TableError> {
        info!(
            "Loading reference tables from {}",
            source.data_dir().display()
        );

        let expander = UidExpander::from_source(source)?;
        info!(
            "Loaded {} uid expansion(s) from '{}'",
            expander.len(),
            Table::UidExpansion
        );

        let languages = source.load_table::<LanguageRecord>(Table::Language.name())?;
        info!(
            "Loaded {} language(s) from '{}'",
            languages.len(),
            Table::Language
        );

        Ok(Self::new(expander, languages))
    }

    pub fn expand_uid_to_acronym(&self, uid: &str) -> String {
        self.expander.to_acronym(uid)
    }

    pub fn expand_uid_to_name(&self, uid: &str) -> String {
        self.expander.to_name(uid)
    }

    /// Languages in table order.
    pub fn list_languages(&self) -> &[LanguageRecord] {
        &self.languages
    }

    /// Entries held for `table`: distinct uids or languages.
    pub fn entry_count(&self, table: Table) -> usize {
        match table {
            Table::UidExpansion => self.expander.len(),
            Table::Language => self.languages.len(),
        }
    }
}
