use dioxus::logger::tracing::debug;

use crate::domain::entities::edit::{CellKey, CellMode, EditModeSet};
use crate::domain::entities::row::Row;
use crate::domain::entities::schema::{Column, ColumnId, TableData};
use crate::domain::entities::sort::{SortIndicator, SortKey};
use crate::domain::entities::staging::{StagingBuffer, ValidationError};
use crate::domain::entities::value::CellValue;
use crate::usecase::ports::ids::{RowIdGenerator, RowIdSequence};
use crate::usecase::services::edit_service::{begin_edit, cell_mode, end_edit, update_cell};
use crate::usecase::services::query_service::{
    next_sort_key, project, set_column_visibility, sort_indicator, visible_columns,
};
use crate::usecase::services::staging_service::{commit_new_row, stage, stage_input};

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    RequestEdit(CellKey),
    CommitCell { key: CellKey, value: CellValue },
    CancelEdit(CellKey),
    ToggleColumn { column_id: ColumnId, visible: bool },
    RequestSort(ColumnId),
    OpenNewRow,
    StageField { column_id: ColumnId, value: CellValue },
    StageInput { column_id: ColumnId, raw: String },
    CommitNewRow,
    CancelNewRow,
}

/// Whole widget state. Never mutated in place: every event produces a new
/// value through [`TableState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<G = RowIdSequence> {
    columns: Vec<Column>,
    rows: Vec<Row>,
    edit_mode: EditModeSet,
    sort_key: Option<SortKey>,
    staging: StagingBuffer,
    add_row_open: bool,
    ids: G,
}

impl TableState<RowIdSequence> {
    pub fn new(data: TableData) -> Self {
        let ids = RowIdSequence::after_rows(&data.data);
        Self::with_id_generator(data, ids)
    }
}

impl<G: RowIdGenerator + Clone> TableState<G> {
    pub fn with_id_generator(data: TableData, ids: G) -> Self {
        Self {
            columns: data.columns,
            rows: data.data,
            edit_mode: EditModeSet::new(),
            sort_key: None,
            staging: StagingBuffer::default(),
            add_row_open: false,
            ids,
        }
    }

    pub fn reduce(&self, event: TableEvent) -> Self {
        debug!(?event, "reducing table event");
        match event {
            TableEvent::RequestEdit(key) => {
                if !self.has_cell(&key) {
                    debug!(?key, "edit request ignored: stale cell reference");
                    return self.clone();
                }
                Self {
                    edit_mode: begin_edit(&self.edit_mode, key),
                    ..self.clone()
                }
            }
            TableEvent::CommitCell { key, value } => {
                if !self.has_cell(&key) {
                    debug!(?key, "cell commit ignored: stale cell reference");
                    return self.clone();
                }
                if !self.column(&key.column_id).is_some_and(|column| value.fits(column)) {
                    debug!(?key, ?value, "cell commit ignored: value does not fit the column");
                    return self.clone();
                }
                Self {
                    rows: update_cell(&self.rows, &key.row_id, &key.column_id, &value),
                    edit_mode: end_edit(&self.edit_mode, &key),
                    ..self.clone()
                }
            }
            TableEvent::CancelEdit(key) => Self {
                edit_mode: end_edit(&self.edit_mode, &key),
                ..self.clone()
            },
            TableEvent::ToggleColumn { column_id, visible } => Self {
                columns: set_column_visibility(&self.columns, &column_id, visible),
                ..self.clone()
            },
            TableEvent::RequestSort(column_id) => Self {
                sort_key: next_sort_key(self.sort_key.as_ref(), &column_id),
                ..self.clone()
            },
            TableEvent::OpenNewRow => Self {
                staging: StagingBuffer::default(),
                add_row_open: true,
                ..self.clone()
            },
            TableEvent::StageField { column_id, value } => {
                match self.column(&column_id) {
                    Some(column) if value.fits(column) => Self {
                        staging: stage(&self.staging, column_id, value),
                        ..self.clone()
                    },
                    Some(_) => {
                        debug!(%column_id, ?value, "staged value ignored: does not fit the column");
                        self.clone()
                    }
                    None => {
                        debug!(%column_id, "staged value ignored: no such column");
                        self.clone()
                    }
                }
            }
            TableEvent::StageInput { column_id, raw } => match self.column(&column_id) {
                Some(column) => Self {
                    staging: stage_input(&self.staging, column, &raw),
                    ..self.clone()
                },
                None => {
                    debug!(%column_id, "staged input ignored: no such column");
                    self.clone()
                }
            },
            TableEvent::CommitNewRow => self.commit_new_row().0,
            TableEvent::CancelNewRow => Self {
                staging: StagingBuffer::default(),
                add_row_open: false,
                ..self.clone()
            },
        }
    }

    /// Next state together with the outcome of the commit. On failure the
    /// staging buffer is kept and carries the error.
    pub fn commit_new_row(&self) -> (Self, Result<Row, ValidationError>) {
        let mut ids = self.ids.clone();
        match commit_new_row(&self.staging, &self.columns, &mut ids) {
            Ok(row) => {
                let mut rows = self.rows.clone();
                rows.push(row.clone());
                let next = Self {
                    rows,
                    staging: StagingBuffer::default(),
                    add_row_open: false,
                    ids,
                    ..self.clone()
                };
                (next, Ok(row))
            }
            Err(err) => {
                let mut staging = self.staging.clone();
                staging.error = Some(err.clone());
                let next = Self {
                    staging,
                    ..self.clone()
                };
                (next, Err(err))
            }
        }
    }

    fn has_cell(&self, key: &CellKey) -> bool {
        self.rows.iter().any(|row| row.id == key.row_id)
            && self.columns.iter().any(|column| column.id == key.column_id)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == column_id)
    }

    pub fn visible_columns(&self) -> Vec<&Column> {
        visible_columns(&self.columns)
    }

    pub fn sorted_rows(&self) -> Vec<&Row> {
        project(&self.rows, self.sort_key.as_ref())
    }

    pub fn edit_mode(&self) -> &EditModeSet {
        &self.edit_mode
    }

    pub fn cell_mode(&self, key: &CellKey) -> CellMode {
        cell_mode(&self.edit_mode, key)
    }

    pub fn is_editing(&self, key: &CellKey) -> bool {
        self.cell_mode(key) == CellMode::Editing
    }

    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort_key.as_ref()
    }

    pub fn sort_indicator(&self, column_id: &ColumnId) -> SortIndicator {
        sort_indicator(self.sort_key.as_ref(), column_id)
    }

    pub fn staging(&self) -> &StagingBuffer {
        &self.staging
    }

    pub fn add_row_open(&self) -> bool {
        self.add_row_open
    }
}
