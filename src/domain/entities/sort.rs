use crate::domain::entities::schema::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column_id: ColumnId,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column_id: ColumnId) -> Self {
        Self {
            column_id,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Asc,
    Desc,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::None => "⇵",
            SortIndicator::Asc => "🔼",
            SortIndicator::Desc => "🔽",
        }
    }
}
