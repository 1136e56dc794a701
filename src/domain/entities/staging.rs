use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::schema::ColumnId;
use crate::domain::entities::value::{CellValue, ValueError};

static UNSET: CellValue = CellValue::Unset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields before adding a new row.")]
    MissingFields { columns: Vec<ColumnId> },
    #[error("No unused row identifier is left for a new row.")]
    RowIdsExhausted,
}

/// Values for a row that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StagingBuffer {
    pub fields: BTreeMap<ColumnId, CellValue>,
    pub error: Option<ValidationError>,
    pub input_error: Option<ValueError>,
}

impl StagingBuffer {
    pub fn value(&self, column_id: &ColumnId) -> &CellValue {
        self.fields.get(column_id).unwrap_or(&UNSET)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.error.is_none() && self.input_error.is_none()
    }

    /// Input coercion problems take precedence over the last commit outcome.
    pub fn error_message(&self) -> Option<String> {
        self.input_error
            .as_ref()
            .map(|err| err.to_string())
            .or_else(|| self.error.as_ref().map(|err| err.to_string()))
    }
}
