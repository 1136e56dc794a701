use std::collections::BTreeSet;

use crate::domain::entities::row::RowId;
use crate::domain::entities::schema::ColumnId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub row_id: RowId,
    pub column_id: ColumnId,
}

impl CellKey {
    pub fn new(row_id: RowId, column_id: ColumnId) -> Self {
        Self { row_id, column_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    Viewing,
    Editing,
}

/// Cells currently rendered as input controls.
pub type EditModeSet = BTreeSet<CellKey>;
