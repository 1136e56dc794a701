use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::row::{Row, RowId};
use crate::domain::entities::schema::{Column, ColumnType, TableData};
use crate::domain::entities::value::{CellValue, ValueError};

pub const DEMO_TABLE_DATA: &str = include_str!("../../assets/table_data.json");

#[derive(Debug, Deserialize)]
struct RawTableData {
    columns: Vec<Column>,
    #[serde(default)]
    data: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    id: Value,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

/// Reads `{ "columns": [...], "data": [...] }` where each row is a flat object
/// keyed by column id. Field values are typed by their column.
pub fn load_table_data(json: &str) -> Result<TableData> {
    let raw: RawTableData = serde_json::from_str(json).context("table data is not valid JSON")?;

    let mut rows = Vec::with_capacity(raw.data.len());
    for raw_row in raw.data {
        let id = row_id_from_json(&raw_row.id)
            .ok_or_else(|| anyhow!("row id must be a string or number, got {}", raw_row.id))?;
        let mut row = Row::new(id);
        for column in &raw.columns {
            let Some(raw_value) = raw_row.fields.get(column.id.as_str()) else {
                continue;
            };
            let value = cell_value_from_json(column, raw_value)
                .with_context(|| format!("invalid value in row {}", row.id))?;
            row.fields.insert(column.id.clone(), value);
        }
        rows.push(row);
    }

    let data = TableData {
        columns: raw.columns,
        data: rows,
    };
    data.validate().context("table data violates the schema")?;
    Ok(data)
}

fn row_id_from_json(value: &Value) -> Option<RowId> {
    match value {
        Value::String(id) if !id.is_empty() => Some(RowId(id.clone())),
        Value::Number(id) => Some(RowId(id.to_string())),
        _ => None,
    }
}

pub fn cell_value_from_json(column: &Column, value: &Value) -> Result<CellValue, ValueError> {
    match (column.column_type, value) {
        (_, Value::Null) => Ok(CellValue::Unset),
        (ColumnType::Boolean, Value::Bool(flag)) => Ok(CellValue::Bool(*flag)),
        (ColumnType::Number, Value::Number(number)) => match number.as_f64() {
            Some(number) => Ok(CellValue::Number(number)),
            None => CellValue::from_input(column, &number.to_string()),
        },
        (_, Value::String(text)) => CellValue::from_input(column, text),
        (_, other) => CellValue::from_input(column, &other.to_string()),
    }
}
