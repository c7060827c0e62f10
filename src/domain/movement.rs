use crate::{
    domain::{card::Card, column::ColumnId, event::DraggableLocation},
    error::{Result, StepboardError},
};
use std::collections::HashMap;

/// New card lists per column after a move
pub type ColumnPartition = HashMap<ColumnId, Vec<Card>>;

/// Moves a card from one column list into another
///
/// Neither input slice is touched; the result holds fresh copies of both
/// lists keyed by their column identifiers. The moved card is re-tagged with
/// the destination column.
///
/// # Examples
/// ```
/// use stepboard_core::domain::card::Card;
/// use stepboard_core::domain::column::ColumnId;
/// use stepboard_core::domain::event::DraggableLocation;
/// use stepboard_core::domain::movement::move_card;
///
/// let todo = vec![Card::new(1, "A", "todo"), Card::new(2, "B", "todo")];
/// let in_progress: Vec<Card> = Vec::new();
///
/// let result = move_card(
///     &todo,
///     &in_progress,
///     &DraggableLocation::new("todo", 0),
///     &DraggableLocation::new("inProgress", 0),
/// )
/// .unwrap();
///
/// assert_eq!(result[&ColumnId::from("todo")], vec![Card::new(2, "B", "todo")]);
/// assert_eq!(result[&ColumnId::from("inProgress")], vec![Card::new(1, "A", "inProgress")]);
/// ```
pub fn move_card(
    source_cards: &[Card],
    dest_cards: &[Card],
    source: &DraggableLocation,
    destination: &DraggableLocation,
) -> Result<ColumnPartition> {
    if source.droppable_id == destination.droppable_id {
        return Err(StepboardError::SameColumnMove(
            source.droppable_id.to_string(),
        ));
    }
    if source.index >= source_cards.len() {
        return Err(StepboardError::PositionOutOfRange {
            column: source.droppable_id.to_string(),
            position: source.index,
            len: source_cards.len(),
        });
    }
    // Inserting at len appends
    if destination.index > dest_cards.len() {
        return Err(StepboardError::PositionOutOfRange {
            column: destination.droppable_id.to_string(),
            position: destination.index,
            len: dest_cards.len(),
        });
    }

    let mut source_clone = source_cards.to_vec();
    let mut dest_clone = dest_cards.to_vec();

    let mut removed = source_clone.remove(source.index);
    removed.column_type = destination.droppable_id.clone();
    dest_clone.insert(destination.index, removed);

    let mut result = ColumnPartition::with_capacity(2);
    result.insert(source.droppable_id.clone(), source_clone);
    result.insert(destination.droppable_id.clone(), dest_clone);
    Ok(result)
}
