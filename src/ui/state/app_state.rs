use std::collections::{BTreeMap, HashMap};

use dioxus::prelude::*;

use crate::domain::entities::edit::CellKey;
use crate::domain::entities::schema::{Column, ColumnId, ColumnType, TableData};
use crate::domain::entities::value::{CellValue, ValueError};
use crate::ui::state::table_state::{TableEvent, TableState};

pub struct AppState {
    pub table: Signal<TableState>,
    pub cell_drafts: Signal<BTreeMap<CellKey, String>>,
    pub new_row_inputs: Signal<HashMap<ColumnId, String>>,
    pub show_column_filter: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(table_data: TableData) -> Self {
        Self {
            table: use_signal(move || TableState::new(table_data)),
            cell_drafts: use_signal(BTreeMap::<CellKey, String>::new),
            new_row_inputs: use_signal(HashMap::<ColumnId, String>::new),
            show_column_filter: use_signal(|| false),
            status: use_signal(String::new),
        }
    }
}

pub fn dispatch(mut table: Signal<TableState>, event: TableEvent) {
    let next = table.read().reduce(event);
    table.set(next);
}

/// Event for a cell editor losing focus or confirming with Enter. A pending
/// draft is committed; boolean editors commit on change, so leaving them
/// only closes the editor.
pub fn leave_cell_event(
    column: &Column,
    key: CellKey,
    draft: Option<&str>,
) -> Result<TableEvent, ValueError> {
    match (column.column_type, draft) {
        (ColumnType::Boolean, _) | (_, None) => Ok(TableEvent::CancelEdit(key)),
        (_, Some(raw)) => {
            let value = CellValue::from_input(column, raw)?;
            Ok(TableEvent::CommitCell { key, value })
        }
    }
}
