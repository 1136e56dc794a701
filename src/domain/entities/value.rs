use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::entities::schema::{Column, ColumnId, ColumnType};

pub const UNSET_CHOICE: &str = "None";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Unset,
    Text(String),
    Number(f64),
    Bool(bool),
    Choice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{column} expects a number, got \"{input}\"")]
    NotANumber { column: ColumnId, input: String },
    #[error("{column} expects yes or no, got \"{input}\"")]
    NotABoolean { column: ColumnId, input: String },
    #[error("\"{input}\" is not an option of {column}")]
    UnknownOption { column: ColumnId, input: String },
}

impl ValueError {
    pub fn column(&self) -> &ColumnId {
        match self {
            ValueError::NotANumber { column, .. }
            | ValueError::NotABoolean { column, .. }
            | ValueError::UnknownOption { column, .. } => column,
        }
    }
}

impl CellValue {
    /// Coerces raw control text into the value domain of `column`.
    pub fn from_input(column: &Column, raw: &str) -> Result<Self, ValueError> {
        match column.column_type {
            ColumnType::Text => Ok(CellValue::Text(raw.to_string())),
            ColumnType::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(CellValue::Unset);
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .map(CellValue::Number)
                    .ok_or_else(|| ValueError::NotANumber {
                        column: column.id.clone(),
                        input: raw.to_string(),
                    })
            }
            ColumnType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" => Ok(CellValue::Bool(true)),
                "false" | "no" | "off" | "" => Ok(CellValue::Bool(false)),
                _ => Err(ValueError::NotABoolean {
                    column: column.id.clone(),
                    input: raw.to_string(),
                }),
            },
            ColumnType::Select => {
                if raw.is_empty() || raw == UNSET_CHOICE {
                    Ok(CellValue::Unset)
                } else if column.has_option(raw) {
                    Ok(CellValue::Choice(raw.to_string()))
                } else {
                    Err(ValueError::UnknownOption {
                        column: column.id.clone(),
                        input: raw.to_string(),
                    })
                }
            }
        }
    }

    /// Whether this value belongs to the value domain of `column`.
    pub fn fits(&self, column: &Column) -> bool {
        match (self, column.column_type) {
            (CellValue::Unset, _) => true,
            (CellValue::Text(_), ColumnType::Text) => true,
            (CellValue::Number(number), ColumnType::Number) => number.is_finite(),
            (CellValue::Bool(_), ColumnType::Boolean) => true,
            (CellValue::Choice(choice), ColumnType::Select) => column.has_option(choice),
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Unset => true,
            CellValue::Text(text) | CellValue::Choice(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, CellValue::Bool(true))
    }

    /// Static text shown while the cell is not being edited.
    pub fn display(&self, column_type: ColumnType) -> String {
        match self {
            CellValue::Unset => match column_type {
                ColumnType::Select => UNSET_CHOICE.to_string(),
                ColumnType::Boolean => "No".to_string(),
                ColumnType::Text | ColumnType::Number => String::new(),
            },
            CellValue::Bool(true) => "Yes".to_string(),
            CellValue::Bool(false) => "No".to_string(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Text(text) | CellValue::Choice(text) => text.clone(),
        }
    }

    /// Text placed into an editing control; `from_input` reads it back unchanged.
    pub fn input_value(&self) -> String {
        match self {
            CellValue::Unset => String::new(),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Text(text) | CellValue::Choice(text) => text.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Unset => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) | CellValue::Choice(_) => 3,
        }
    }

    /// Total order used by the sort projector. No coercion across variants.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (
                CellValue::Text(a) | CellValue::Choice(a),
                CellValue::Text(b) | CellValue::Choice(b),
            ) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
