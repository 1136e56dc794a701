use dioxus::logger::tracing::debug;

use crate::domain::entities::edit::{CellKey, CellMode, EditModeSet};
use crate::domain::entities::row::{Row, RowId};
use crate::domain::entities::schema::ColumnId;
use crate::domain::entities::value::CellValue;

/// Replaces one field of the matching row wholesale. Every other row is
/// returned untouched; an unknown `row_id` leaves the collection as it was.
pub fn update_cell(
    rows: &[Row],
    row_id: &RowId,
    column_id: &ColumnId,
    value: &CellValue,
) -> Vec<Row> {
    if !rows.iter().any(|row| &row.id == row_id) {
        debug!(%row_id, %column_id, "cell commit ignored: no such row");
    }
    rows.iter()
        .map(|row| {
            if &row.id != row_id {
                return row.clone();
            }
            let mut next = row.clone();
            next.fields.insert(column_id.clone(), value.clone());
            next
        })
        .collect()
}

pub fn begin_edit(edit_mode: &EditModeSet, key: CellKey) -> EditModeSet {
    let mut next = edit_mode.clone();
    next.insert(key);
    next
}

pub fn end_edit(edit_mode: &EditModeSet, key: &CellKey) -> EditModeSet {
    let mut next = edit_mode.clone();
    next.remove(key);
    next
}

pub fn cell_mode(edit_mode: &EditModeSet, key: &CellKey) -> CellMode {
    if edit_mode.contains(key) {
        CellMode::Editing
    } else {
        CellMode::Viewing
    }
}
