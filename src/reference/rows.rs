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

//! Row types of the reference tables.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::tables::{Table, TableRow};

/// One row of `uid_expansion`: a uid component with its acronym and display name.
///
/// `acro` and `name` may be empty; an empty value expands like a missing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidExpansionRow {
    pub uid: String,
    pub acro: String,
    pub name: String,
}

impl TableRow for UidExpansionRow {
    const TABLE: Table = Table::UidExpansion;

    fn validate(&self) -> Result<(), String> {
        if self.uid.is_empty() {
            return Err("uid cannot be empty".to_string());
        }
        Ok(())
    }
}

/// One row of `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Language code used in text uids and URLs (e.g. `pli`, `en`)
    pub uid: String,
    /// English name of the language
    pub name: String,
    /// ISO 639 code, empty when the language has none
    pub iso_code: String,
    /// Whether texts in this language are root (original) texts
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_root: bool,
    /// Whether the site interface is translated into this language
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub localized: bool,
}

impl TableRow for LanguageRecord {
    const TABLE: Table = Table::Language;

    fn validate(&self) -> Result<(), String> {
        if self.uid.is_empty() {
            return Err("uid cannot be empty".to_string());
        }
        if self.name.is_empty() {
            return Err(format!("name cannot be empty (language '{}')", self.uid));
        }
        Ok(())
    }
}

/// Boolean cell: `true/false`, `yes/no` or `1/0`, any case; empty means `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "0" => Ok(false),
        "true" | "yes" | "1" => Ok(true),
        other => Err(de::Error::custom(format!("invalid boolean flag '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_languages(csv_text: &str) -> Result<Vec<LanguageRecord>, csv::Error> {
        csv::Reader::from_reader(csv_text.as_bytes())
            .into_deserialize()
            .collect()
    }

    #[test]
    fn test_language_flags_accept_common_spellings() {
        let rows = parse_languages(
            "uid,name,iso_code,is_root,localized\n\
             pli,Pali,pi,True,no\n\
             en,English,en,0,YES\n\
             lzh,Literary Chinese,lzh,,\n",
        )
        .unwrap();

        assert!(rows[0].is_root);
        assert!(!rows[0].localized);
        assert!(!rows[1].is_root);
        assert!(rows[1].localized);
        assert!(!rows[2].is_root);
        assert!(!rows[2].localized);
    }

    #[test]
    fn test_language_flags_default_when_columns_absent() {
        let rows = parse_languages("uid,name,iso_code\nde,German,de\n").unwrap();
        assert_eq!(
            rows,
            vec![LanguageRecord {
                uid: "de".to_string(),
                name: "German".to_string(),
                iso_code: "de".to_string(),
                is_root: false,
                localized: false,
            }]
        );
    }

    #[test]
    fn test_language_flag_rejects_garbage() {
        let result = parse_languages("uid,name,iso_code,is_root\nen,English,en,maybe\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_requires_identifying_fields() {
        let row = UidExpansionRow {
            uid: String::new(),
            acro: "MN".to_string(),
            name: "Majjhima Nikāya".to_string(),
        };
        assert!(row.validate().is_err());

        let language = LanguageRecord {
            uid: "en".to_string(),
            name: String::new(),
            iso_code: "en".to_string(),
            is_root: false,
            localized: true,
        };
        let reason = language.validate().unwrap_err();
        assert!(reason.contains("'en'"));
    }

    #[test]
    fn test_empty_acronym_is_a_valid_row() {
        let row = UidExpansionRow {
            uid: "pli".to_string(),
            acro: String::new(),
            name: String::new(),
        };
        assert!(row.validate().is_ok());
    }
}
