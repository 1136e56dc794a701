use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::row::{Row, RowId};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub String);

impl ColumnId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        ColumnId(value.to_string())
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[serde(alias = "string")]
    Text,
    Number,
    Boolean,
    Select,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    #[serde(default)]
    pub ordinal_no: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Column {
    pub fn new(id: &str, title: &str, column_type: ColumnType) -> Self {
        Self {
            id: ColumnId::from(id),
            ordinal_no: 0,
            title: title.to_string(),
            column_type,
            width: None,
            hidden: false,
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|option| option.to_string()).collect();
        self
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),
    #[error("select column {0} has no options")]
    MissingOptions(ColumnId),
    #[error("duplicate row id: {0}")]
    DuplicateRow(RowId),
}

/// Columns plus rows, as handed to the widget once at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub data: Vec<Row>,
}

impl TableData {
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut column_ids = BTreeSet::new();
        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(SchemaError::DuplicateColumn(column.id.clone()));
            }
            if column.column_type == ColumnType::Select && column.options.is_empty() {
                return Err(SchemaError::MissingOptions(column.id.clone()));
            }
        }

        let mut row_ids = BTreeSet::new();
        for row in &self.data {
            if !row_ids.insert(&row.id) {
                return Err(SchemaError::DuplicateRow(row.id.clone()));
            }
        }
        Ok(())
    }
}
