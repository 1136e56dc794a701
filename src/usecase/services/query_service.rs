use dioxus::logger::tracing::debug;

use crate::domain::entities::row::Row;
use crate::domain::entities::schema::{Column, ColumnId};
use crate::domain::entities::sort::{SortDirection, SortIndicator, SortKey};

/// Header activation cycle: same column goes asc -> desc -> none, any other
/// column starts over at asc.
pub fn next_sort_key(current: Option<&SortKey>, column_id: &ColumnId) -> Option<SortKey> {
    match current {
        Some(key) if &key.column_id == column_id => match key.direction {
            SortDirection::Asc => Some(SortKey {
                column_id: column_id.clone(),
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortKey::asc(column_id.clone())),
    }
}

pub fn sort_indicator(sort_key: Option<&SortKey>, column_id: &ColumnId) -> SortIndicator {
    match sort_key {
        Some(key) if &key.column_id == column_id => match key.direction {
            SortDirection::Asc => SortIndicator::Asc,
            SortDirection::Desc => SortIndicator::Desc,
        },
        _ => SortIndicator::None,
    }
}

/// Display order for `rows`. `sort_by` is stable, so rows with equal keys keep
/// their insertion order in both directions.
pub fn project<'a>(rows: &'a [Row], sort_key: Option<&SortKey>) -> Vec<&'a Row> {
    let mut ordered: Vec<&Row> = rows.iter().collect();
    let Some(key) = sort_key else {
        return ordered;
    };
    ordered.sort_by(|a, b| {
        let ordering = a.value(&key.column_id).compare(b.value(&key.column_id));
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    ordered
}

/// Columns not hidden, in storage order.
pub fn visible_columns(columns: &[Column]) -> Vec<&Column> {
    columns.iter().filter(|column| !column.hidden).collect()
}

pub fn set_column_visibility(columns: &[Column], column_id: &ColumnId, visible: bool) -> Vec<Column> {
    if !columns.iter().any(|column| &column.id == column_id) {
        debug!(%column_id, "visibility toggle ignored: no such column");
    }
    columns
        .iter()
        .map(|column| {
            if &column.id == column_id {
                Column {
                    hidden: !visible,
                    ..column.clone()
                }
            } else {
                column.clone()
            }
        })
        .collect()
}
