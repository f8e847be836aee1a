// src/specs/columns.rs

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Semantic feed columns, in canonical feed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Seq,
    Category,
    Gender,
    Size,
    Url,
    Status,
    Notes,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Seq, Column::Category, Column::Gender, Column::Size,
        Column::Url, Column::Status, Column::Notes,
    ];

    /// Header name as published in the sheet.
    pub fn canonical(self) -> &'static str {
        match self {
            Column::Seq => "STT",
            Column::Category => "CATEGORY",
            Column::Gender => "GENDER",
            Column::Size => "SIZE",
            Column::Url => "URL",
            Column::Status => "STATUS",
            Column::Notes => "NOTES",
        }
    }

    /// Everything except `Notes`.
    pub fn is_mandatory(self) -> bool {
        !matches!(self, Column::Notes)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Header matching strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMatch {
    /// Whole header text equals the canonical name.
    Exact,
    /// Header text contains the canonical name (`"Category (EN)"` → `CATEGORY`).
    /// An exact header still wins over an earlier containing one.
    #[default]
    Substring,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("feed has no header row")]
    EmptyFeed,
    #[error("feed header is missing column(s): {}", join_columns(.0))]
    MissingColumns(Vec<Column>),
}

fn join_columns(cols: &[Column]) -> String {
    cols.iter().map(|c| c.canonical()).collect::<Vec<_>>().join(", ")
}

/// Resolved header: semantic column → field index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    ix: [Option<usize>; 7],
}

impl ColumnMap {
    /// Locate every column in `header`. Fails if any mandatory column is absent.
    pub fn resolve<S: AsRef<str>>(header: &[S], strategy: ColumnMatch) -> Result<Self, SchemaError> {
        let folded: Vec<String> = header.iter().map(|h| fold(h.as_ref())).collect();

        let mut ix = [None; 7];
        for col in Column::ALL {
            ix[col.slot()] = find(&folded, &fold(col.canonical()), strategy);
        }

        let missing: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| c.is_mandatory() && ix[c.slot()].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }

        Ok(Self { ix })
    }

    pub fn index(&self, col: Column) -> Option<usize> {
        self.ix[col.slot()]
    }

    /// Fields a row needs so that every resolved index is present.
    pub fn min_fields(&self) -> usize {
        self.ix.iter().flatten().max().map_or(0, |&m| m + 1)
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

fn find(folded: &[String], name: &str, strategy: ColumnMatch) -> Option<usize> {
    let exact = folded.iter().position(|h| h == name);
    match strategy {
        ColumnMatch::Exact => exact,
        ColumnMatch::Substring => exact.or_else(|| folded.iter().position(|h| h.contains(name))),
    }
}
