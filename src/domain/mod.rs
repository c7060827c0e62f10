pub mod board;
pub mod card;
pub mod column;
pub mod event;
pub mod gate;
pub mod movement;

pub use board::{Board, BoardView, ColumnView, DraggableView, DropOutcome};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId, ColumnRegistry};
pub use event::{DragEnd, DragStart, DraggableLocation, DropResult};
pub use gate::{AdjacencyGate, DragState};
pub use movement::{move_card, ColumnPartition};
