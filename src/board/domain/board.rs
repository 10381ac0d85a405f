//! Board entity: the left-to-right order of columns.

use super::{BoardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A board and the order in which its columns are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    name: String,
    #[serde(default)]
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Creates a board with the given column order.
    #[must_use]
    pub fn new(
        id: BoardId,
        name: impl Into<String>,
        column_order: impl IntoIterator<Item = ColumnId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            column_order: column_order.into_iter().collect(),
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column ids in display order.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }
}
