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

//! Expansion of text uids into readable labels.
//!
//! A uid such as `sn22.1-5` is split into components (`sn`, `22.1-5`), each
//! component is replaced by its lookup value or, failing that, by its uppercase
//! form, and the results are joined with spaces. Hyphens between two digits
//! then become en dashes:
//!
//! ```
//! use indexmap::IndexMap;
//! use sutta_server::search::uid_expansion::expand_uid;
//!
//! let mut acronyms = IndexMap::new();
//! acronyms.insert("sn".to_string(), "SN".to_string());
//!
//! assert_eq!(expand_uid("sn22.1-5", &acronyms), "SN 22.1–5");
//! assert_eq!(expand_uid("xyz3", &acronyms), "XYZ 3");
//! ```
//!
//! Expansion never fails; input without any component expands to `""`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::reference::{Table, TableError, TableSource, UidExpansionRow};

/// Lookup from uid component to its replacement text.
pub type LookupTable = IndexMap<String, String>;

lazy_static! {
    /// Alphabetic runs, or `digits[.digits][-digits]`. Leftmost-first, so the
    /// alphabetic alternative wins where both could start.
    static ref UID_COMPONENT: Regex =
        Regex::new(r"\p{Alphabetic}+|\d+(?:\.\d+)?(?:-\d+)?").expect("Invalid regex pattern");

    static ref DIGIT_HYPHEN_DIGIT: Regex = Regex::new(r"\d-\d").expect("Invalid regex pattern");
}

/// Components of `uid` in order. Characters outside any component are skipped.
pub fn uid_components(uid: &str) -> Vec<&str> {
    UID_COMPONENT.find_iter(uid).map(|m| m.as_str()).collect()
}

/// The lookup value for `component`, or its uppercase form when the table has
/// no entry or an empty one.
pub fn resolve_component(table: &LookupTable, component: &str) -> String {
    match table.get(component) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => component.to_uppercase(),
    }
}

/// Expand `uid` against `table`.
pub fn expand_uid(uid: &str, table: &LookupTable) -> String {
    let joined = uid_components(uid)
        .into_iter()
        .map(|component| resolve_component(table, component))
        .collect::<Vec<_>>()
        .join(" ");
    dash_numeric_ranges(&joined)
}

/// Replace every hyphen that sits directly between two digits with an en dash.
///
/// Adjacent ranges overlap on their shared digit (`1-2-3`), so each search
/// resumes on the digit after the hyphen rather than after the whole match.
pub fn dash_numeric_ranges(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut copied_up_to = 0;
    let mut search_from = 0;

    while let Some(m) = DIGIT_HYPHEN_DIGIT.find_at(text, search_from) {
        let Some(offset) = m.as_str().find('-') else {
            break;
        };
        let hyphen = m.start() + offset;
        out.push_str(&text[copied_up_to..hyphen]);
        out.push('–');
        copied_up_to = hyphen + 1;
        search_from = hyphen + 1;
    }

    out.push_str(&text[copied_up_to..]);
    out
}

/// Acronym and display-name tables built from `uid_expansion`.
///
/// Duplicate uids resolve last-row-wins in both tables.
#[derive(Debug, Clone, Default)]
pub struct UidExpander {
    acronyms: LookupTable,
    names: LookupTable,
}

impl UidExpander {
    /// Build both tables in one pass, stopping at the first bad row.
    pub fn from_rows<I>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Result<UidExpansionRow, TableError>>,
    {
        let mut acronyms = LookupTable::new();
        let mut names = LookupTable::new();

        for row in rows {
            let UidExpansionRow { uid, acro, name } = row?;

            let previous_acro = acronyms.insert(uid.clone(), acro.clone());
            let previous_name = names.insert(uid.clone(), name.clone());
            if let (Some(previous_acro), Some(previous_name)) = (previous_acro, previous_name) {
                if previous_acro != acro || previous_name != name {
                    warn!(
                        "Duplicate uid '{uid}' in {}: '{previous_acro}'/'{previous_name}' replaced by '{acro}'/'{name}'",
                        Table::UidExpansion
                    );
                }
            }
        }

        Ok(Self { acronyms, names })
    }

    /// Read `uid_expansion` from `source`.
    pub fn from_source(source: &TableSource) -> Result<Self, TableError> {
        Self::from_rows(source.table_reader::<UidExpansionRow>(Table::UidExpansion.name())?)
    }

    pub fn to_acronym(&self, uid: &str) -> String {
        expand_uid(uid, &self.acronyms)
    }

    pub fn to_name(&self, uid: &str) -> String {
        expand_uid(uid, &self.names)
    }

    /// Number of distinct uids.
    pub fn len(&self) -> usize {
        self.acronyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty()
    }
}
