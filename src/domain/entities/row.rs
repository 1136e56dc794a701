use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::schema::ColumnId;
use crate::domain::entities::value::CellValue;

static UNSET: CellValue = CellValue::Unset;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub String);

impl RowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        RowId(value.to_string())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub fields: BTreeMap<ColumnId, CellValue>,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_field(mut self, column_id: &str, value: CellValue) -> Self {
        self.fields.insert(ColumnId::from(column_id), value);
        self
    }

    /// Columns added after this row was created read as `Unset`.
    pub fn value(&self, column_id: &ColumnId) -> &CellValue {
        self.fields.get(column_id).unwrap_or(&UNSET)
    }
}
