use crate::domain::column::{Column, ColumnId, ColumnRegistry};
use serde::{Deserialize, Serialize};

/// Drag progress as seen by the board
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DragState {
    #[default]
    Idle,
    Dragging { origin_index: u32, origin: ColumnId },
}

/// Checks if two column indices sit next to each other
pub fn is_adjacent(a: u32, b: u32) -> bool {
    a.abs_diff(b) == 1
}

/// Restricts drops to the columns directly beside the one a drag started in
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGate {
    state: DragState,
}

impl AdjacencyGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: DragState) -> Self {
        Self { state }
    }

    /// Starts tracking a drag; a second start simply re-targets the origin
    pub fn begin(&mut self, origin_index: u32, origin: ColumnId) {
        self.state = DragState::Dragging {
            origin_index,
            origin,
        };
    }

    /// Back to idle, whether or not anything moved
    pub fn end(&mut self) -> DragState {
        std::mem::take(&mut self.state)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether a column currently accepts drops
    ///
    /// The origin column is never adjacent to itself, so it is disabled too.
    pub fn is_drop_enabled(&self, column: &Column) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Dragging { origin_index, .. } => is_adjacent(column.index, origin_index),
        }
    }

    /// Indices of all columns accepting drops right now
    pub fn eligible_indices(&self, registry: &ColumnRegistry) -> Vec<u32> {
        registry
            .iter()
            .filter(|column| self.is_drop_enabled(column))
            .map(|column| column.index)
            .collect()
    }
}
