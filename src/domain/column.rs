use crate::error::{Result, StepboardError};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Identifier of a board column (e.g., todo, inProgress)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed lane on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub column_type: ColumnId,
    /// 1-based position; columns one index apart are adjacent
    pub index: u32,
    #[serde(rename = "fieldName")]
    pub display_name: String,
}

impl Column {
    pub fn new(column_type: impl Into<ColumnId>, index: u32, display_name: &str) -> Self {
        Self {
            column_type: column_type.into(),
            index,
            display_name: display_name.to_string(),
        }
    }
}

/// Columns shipped with a fresh board
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", 1, "Todo"),
        Column::new("inProgress", 2, "In-Progress"),
        Column::new("testing", 3, "Testing"),
        Column::new("done", 4, "Done"),
    ]
}

/// Ordered, immutable set of columns
///
/// Indices always form the contiguous range `1..=len()`, which is what
/// makes "adjacent" well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl ColumnRegistry {
    /// Builds a registry, rejecting empty, duplicated or gapped column sets
    pub fn new(mut columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(StepboardError::ConfigError(
                "board needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.column_type.as_str()) {
                return Err(StepboardError::ConfigError(format!(
                    "duplicate column identifier '{}'",
                    column.column_type
                )));
            }
        }

        columns.sort_by_key(|c| c.index);
        for (expected, column) in (1u32..).zip(&columns) {
            if column.index != expected {
                return Err(StepboardError::ConfigError(format!(
                    "column indices must be contiguous from 1, found {} for '{}' where {} was expected",
                    column.index, column.column_type, expected
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Looks up a column by identifier
    pub fn find(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.column_type == id)
    }

    /// Like [`find`](Self::find) but fails with `InvalidColumn`
    pub fn require(&self, id: &ColumnId) -> Result<&Column> {
        self.find(id)
            .ok_or_else(|| StepboardError::InvalidColumn(id.to_string()))
    }

    pub fn index_of(&self, id: &ColumnId) -> Option<u32> {
        self.find(id).map(|c| c.index)
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}
