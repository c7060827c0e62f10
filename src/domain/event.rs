//! Drag lifecycle payloads delivered by the drag-and-drop front end.
//!
//! The front end sends camelCase JSON objects; a finished drag may carry no
//! destination at all, which [`DragEnd`] turns into an explicit variant.

use crate::{domain::column::ColumnId, error::Result};
use serde::{Deserialize, Serialize};

/// A slot inside a droppable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Fired when the user picks a card up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragStart {
    pub draggable_id: String,
    pub source: DraggableLocation,
}

impl DragStart {
    pub fn new(draggable_id: impl Into<String>, source: DraggableLocation) -> Self {
        Self {
            draggable_id: draggable_id.into(),
            source,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Raw end-of-drag payload as the front end sends it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    #[serde(default)]
    pub draggable_id: String,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

/// How a drag finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEnd {
    /// Released outside every column
    DroppedOutside { source: DraggableLocation },
    DroppedOn {
        source: DraggableLocation,
        destination: DraggableLocation,
    },
}

impl DragEnd {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: DropResult = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    pub fn source(&self) -> &DraggableLocation {
        match self {
            Self::DroppedOutside { source } | Self::DroppedOn { source, .. } => source,
        }
    }
}

impl From<DropResult> for DragEnd {
    fn from(raw: DropResult) -> Self {
        match raw.destination {
            Some(destination) => Self::DroppedOn {
                source: raw.source,
                destination,
            },
            None => Self::DroppedOutside { source: raw.source },
        }
    }
}
