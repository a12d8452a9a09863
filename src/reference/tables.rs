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

//! Named CSV reference tables.
//!
//! Each table lives in `<data_dir>/<name>.csv` with a header row. Columns are
//! matched by name, so their order is free and extra columns are ignored.
//! Cells are trimmed of surrounding whitespace.
//!
//! Rows are validated as they are read. [`TableSource::load_table`] fails on the
//! first malformed row; [`TableSource::table_reader`] yields the same error in
//! sequence so a consumer using `?` stops there too.

use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};
use log::debug;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Known reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// uid component -> acronym and display name
    UidExpansion,
    /// Supported languages
    Language,
}

impl Table {
    /// Dataset name, also the file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Table::UidExpansion => "uid_expansion",
            Table::Language => "language",
        }
    }

    pub fn all() -> &'static [Table] {
        &[Table::UidExpansion, Table::Language]
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::all()
            .iter()
            .copied()
            .find(|table| table.name() == s)
            .ok_or_else(|| TableError::NotFound {
                name: s.to_string(),
            })
    }
}

/// Errors raised while loading reference tables.
///
/// Row numbers are 1-based and count data rows, not the header.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Unknown reference table '{name}'")]
    NotFound { name: String },

    #[error("Reference table '{table}' not found at {}", .path.display())]
    Missing { table: Table, path: PathBuf },

    #[error("Failed to read reference table '{table}': {source}")]
    Io {
        table: Table,
        #[source]
        source: io::Error,
    },

    #[error("Malformed row {row} in reference table '{table}': {source}")]
    Csv {
        table: Table,
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid row {row} in reference table '{table}': {reason}")]
    InvalidRow {
        table: Table,
        row: u64,
        reason: String,
    },

    #[error("Reference table '{table}' does not hold {expected} rows")]
    RowTypeMismatch { table: Table, expected: Table },
}

/// A typed row of one reference table.
pub trait TableRow: DeserializeOwned {
    /// The table this row type is read from.
    const TABLE: Table;

    /// Reject rows whose required fields are present but empty.
    fn validate(&self) -> Result<(), String>;
}

/// Directory of reference tables.
#[derive(Debug, Clone)]
pub struct TableSource {
    data_dir: PathBuf,
}

impl TableSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, table: Table) -> PathBuf {
        self.data_dir.join(table.file_name())
    }

    /// Read every row of the named table.
    pub fn load_table<T: TableRow>(&self, name: &str) -> Result<Vec<T>, TableError> {
        let rows = self
            .table_reader::<T>(name)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} row(s) from reference table '{name}'", rows.len());
        Ok(rows)
    }

    /// Open the named table for a single pass over its rows.
    ///
    /// Unknown names, a row type belonging to another table and a missing file
    /// are reported here; row errors come out of the iterator.
    pub fn table_reader<T: TableRow>(&self, name: &str) -> Result<TableReader<T>, TableError> {
        let table: Table = name.parse()?;
        if table != T::TABLE {
            return Err(TableError::RowTypeMismatch {
                table,
                expected: T::TABLE,
            });
        }

        let path = self.path_for(table);
        let file = File::open(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => TableError::Missing {
                table,
                path: path.clone(),
            },
            _ => TableError::Io { table, source },
        })?;

        let rows = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(file)
            .into_deserialize();

        Ok(TableReader {
            table,
            rows,
            row: 0,
        })
    }
}

/// Lazy, validating iterator over one table's rows.
pub struct TableReader<T> {
    table: Table,
    rows: DeserializeRecordsIntoIter<File, T>,
    row: u64,
}

impl<T> TableReader<T> {
    pub fn table(&self) -> Table {
        self.table
    }
}

impl<T: TableRow> Iterator for TableReader<T> {
    type Item = Result<T, TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.rows.next()?;
        self.row += 1;

        let table = self.table;
        let row = self.row;
        Some(
            record
                .map_err(|source| TableError::Csv { table, row, source })
                .and_then(|parsed| {
                    parsed
                        .validate()
                        .map(|()| parsed)
                        .map_err(|reason| TableError::InvalidRow { table, row, reason })
                }),
        )
    }
}
