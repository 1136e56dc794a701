use std::collections::BTreeMap;

use dioxus::logger::tracing::{debug, info, warn};

use crate::domain::entities::row::Row;
use crate::domain::entities::schema::{Column, ColumnId, ColumnType};
use crate::domain::entities::staging::{StagingBuffer, ValidationError};
use crate::domain::entities::value::CellValue;
use crate::usecase::ports::ids::RowIdGenerator;

pub fn stage(buffer: &StagingBuffer, column_id: ColumnId, value: CellValue) -> StagingBuffer {
    let mut next = buffer.clone();
    next.fields.insert(column_id, value);
    next
}

/// Coerces raw form text for `column` before staging it. Text that does not
/// coerce stages `Unset` and is reported through `input_error`.
pub fn stage_input(buffer: &StagingBuffer, column: &Column, raw: &str) -> StagingBuffer {
    match CellValue::from_input(column, raw) {
        Ok(value) => {
            let mut next = stage(buffer, column.id.clone(), value);
            if next
                .input_error
                .as_ref()
                .is_some_and(|err| err.column() == &column.id)
            {
                next.input_error = None;
            }
            next
        }
        Err(err) => {
            debug!(%err, "staged input rejected");
            let mut next = stage(buffer, column.id.clone(), CellValue::Unset);
            next.input_error = Some(err);
            next
        }
    }
}

/// Builds the row for `buffer` or rejects it as a whole. Booleans default to
/// `false` and selects to `Unset`; every other column needs a non-empty value.
/// An id is only drawn from `ids` once validation has passed.
pub fn commit_new_row<G: RowIdGenerator>(
    buffer: &StagingBuffer,
    columns: &[Column],
    ids: &mut G,
) -> Result<Row, ValidationError> {
    let mut fields = BTreeMap::new();
    for column in columns {
        let staged = buffer.fields.get(&column.id).cloned();
        let value = match (column.column_type, staged) {
            (ColumnType::Boolean, None | Some(CellValue::Unset)) => Some(CellValue::Bool(false)),
            (_, Some(value)) if value.fits(column) => Some(value),
            (ColumnType::Select, _) => Some(CellValue::Unset),
            (ColumnType::Boolean, _) => Some(CellValue::Bool(false)),
            (ColumnType::Text | ColumnType::Number, _) => None,
        };
        if let Some(value) = value {
            fields.insert(column.id.clone(), value);
        }
    }

    let missing: Vec<ColumnId> = columns
        .iter()
        .filter(|column| matches!(column.column_type, ColumnType::Text | ColumnType::Number))
        .filter(|column| fields.get(&column.id).map_or(true, CellValue::is_empty))
        .map(|column| column.id.clone())
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "new row rejected");
        return Err(ValidationError::MissingFields { columns: missing });
    }

    let Some(id) = ids.next_id() else {
        warn!("new row rejected: row ids exhausted");
        return Err(ValidationError::RowIdsExhausted);
    };
    let row = Row { id, fields };
    info!(row_id = %row.id, "new row committed");
    Ok(row)
}
