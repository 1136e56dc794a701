use crate::domain::entities::row::{Row, RowId};

pub trait RowIdGenerator {
    /// `None` once the generator cannot hand out an unused id.
    fn next_id(&mut self) -> Option<RowId>;
}

/// Monotonic counter. Never derived from the current row count, so ids stay
/// unique after rows are removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIdSequence {
    next: Option<u64>,
}

impl RowIdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next: Some(next) }
    }

    /// Seeds the counter above the largest numeric id already in use.
    pub fn after_rows(rows: &[Row]) -> Self {
        let highest = rows
            .iter()
            .filter_map(|row| row.id.as_str().trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: highest.checked_add(1),
        }
    }
}

impl RowIdGenerator for RowIdSequence {
    fn next_id(&mut self) -> Option<RowId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(RowId(id.to_string()))
    }
}
