//! # Stepboard Core
//!
//! Board state for the Stepboard drag-and-drop kanban.
//!
//! Cards live in a fixed, ordered set of columns and may only be dragged
//! into a column directly beside the one they came from. This crate owns
//! the card list, the adjacency gate that decides which columns accept a
//! drop, and the move that relocates a card. Rendering and the drag
//! library itself stay with the front end, which feeds drag lifecycle
//! events in and draws [`BoardView`] snapshots.

pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use config::BoardConfig;
pub use domain::{
    board::{Board, BoardView, DropOutcome},
    card::{Card, CardId},
    column::{Column, ColumnId, ColumnRegistry},
    event::{DragEnd, DragStart, DraggableLocation},
    gate::{AdjacencyGate, DragState},
    movement::move_card,
};
pub use error::{Result, StepboardError};
