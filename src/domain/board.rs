use crate::{
    config::BoardConfig,
    domain::{
        card::{cards_in_column, default_cards, Card, CardId},
        column::{Column, ColumnId, ColumnRegistry},
        event::{DragEnd, DragStart, DraggableLocation},
        gate::{AdjacencyGate, DragState},
        movement::{move_card, ColumnPartition},
    },
    error::{Result, StepboardError},
};
use serde::{Deserialize, Serialize};

/// What a finished drag did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside every column; nothing changed
    Cancelled,
    /// Dropped back into its own column; reordering is not supported
    Unchanged,
    Moved {
        card: CardId,
        from: ColumnId,
        to: ColumnId,
    },
}

/// A draggable card as handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableView {
    pub draggable_id: String,
    pub index: usize,
    pub name: String,
}

/// A droppable column as handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub column_type: ColumnId,
    pub display_name: String,
    pub index: u32,
    pub drop_disabled: bool,
    pub cards: Vec<DraggableView>,
}

/// Everything needed to draw the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

/// Kanban board state
#[derive(Debug)]
pub struct Board {
    name: String,
    registry: ColumnRegistry,
    cards: Vec<Card>,
    gate: AdjacencyGate,
}

impl Board {
    /// Creates a board from a validated configuration, seeding its cards
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let registry = config.registry()?;

        Ok(Self {
            name: config.name,
            registry,
            cards: config.cards,
            gate: AdjacencyGate::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// All cards on the board
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one column in display order
    pub fn cards_in(&self, column: &ColumnId) -> Vec<Card> {
        cards_in_column(&self.cards, column)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn drag_state(&self) -> &DragState {
        self.gate.state()
    }

    /// Whether the given column accepts a drop right now
    pub fn is_drop_enabled(&self, column: &ColumnId) -> bool {
        self.registry
            .find(column)
            .map(|col| self.gate.is_drop_enabled(col))
            .unwrap_or(false)
    }

    /// Records where a drag began
    ///
    /// An unknown source column leaves the board idle.
    pub fn on_drag_start(&mut self, event: &DragStart) -> Result<()> {
        let origin = &event.source.droppable_id;
        let column = match self.registry.require(origin) {
            Ok(column) => column,
            Err(err) => {
                tracing::warn!(column = %origin, "Drag started from unknown column");
                self.gate.end();
                return Err(err);
            }
        };

        tracing::debug!(
            draggable = %event.draggable_id,
            column = %origin,
            origin_index = column.index,
            "Drag started"
        );
        self.gate.begin(column.index, origin.clone());
        Ok(())
    }

    /// Applies the end of a drag
    ///
    /// The board is idle again afterwards regardless of the outcome. Errors
    /// never leave the card list partially modified.
    pub fn on_drag_end(&mut self, event: DragEnd) -> Result<DropOutcome> {
        let state = self.gate.end();

        let (source, destination) = match event {
            DragEnd::DroppedOutside { source } => {
                tracing::debug!(column = %source.droppable_id, "Drag dropped outside the board");
                return Ok(DropOutcome::Cancelled);
            }
            DragEnd::DroppedOn {
                source,
                destination,
            } => (source, destination),
        };

        if source.droppable_id == destination.droppable_id {
            tracing::debug!(column = %source.droppable_id, "Drag dropped into its own column");
            return Ok(DropOutcome::Unchanged);
        }

        self.registry.require(&source.droppable_id)?;
        let target = self.registry.require(&destination.droppable_id)?;

        if let DragState::Dragging { origin, .. } = &state {
            if origin != &source.droppable_id {
                tracing::warn!(
                    origin = %origin,
                    from = %source.droppable_id,
                    "Rejected drop whose source differs from the drag origin"
                );
                return Err(StepboardError::DropRejected {
                    from: source.droppable_id.to_string(),
                    to: destination.droppable_id.to_string(),
                });
            }
        }

        // Judge against the state the drag was running under
        let gate = AdjacencyGate::from_state(state);
        if !gate.is_drop_enabled(target) {
            tracing::warn!(
                from = %source.droppable_id,
                to = %destination.droppable_id,
                "Rejected drop onto a non-adjacent column"
            );
            return Err(StepboardError::DropRejected {
                from: source.droppable_id.to_string(),
                to: destination.droppable_id.to_string(),
            });
        }

        self.apply_move(&source, &destination)
    }

    fn apply_move(
        &mut self,
        source: &DraggableLocation,
        destination: &DraggableLocation,
    ) -> Result<DropOutcome> {
        let source_cards = self.cards_in(&source.droppable_id);
        let dest_cards = self.cards_in(&destination.droppable_id);

        let partition = move_card(&source_cards, &dest_cards, source, destination)?;
        // move_card has checked the source index
        let card = source_cards[source.index].id;

        self.apply_partition(partition);

        tracing::info!(
            card = %card,
            from = %source.droppable_id,
            to = %destination.droppable_id,
            position = destination.index,
            "Moved card"
        );

        Ok(DropOutcome::Moved {
            card,
            from: source.droppable_id.clone(),
            to: destination.droppable_id.clone(),
        })
    }

    /// Replaces the listed columns' cards, keeping every other column as is
    fn apply_partition(&mut self, mut partition: ColumnPartition) {
        let mut cards = Vec::with_capacity(self.cards.len());
        for column in self.registry.iter() {
            match partition.remove(&column.column_type) {
                Some(replaced) => cards.extend(replaced),
                None => cards.extend(cards_in_column(&self.cards, &column.column_type)),
            }
        }
        self.cards = cards;
    }

    /// Snapshot for the renderer, columns in index order
    pub fn view(&self) -> BoardView {
        let columns = self
            .registry
            .iter()
            .map(|column| self.column_view(column))
            .collect();

        BoardView {
            name: self.name.clone(),
            columns,
        }
    }

    fn column_view(&self, column: &Column) -> ColumnView {
        let cards = self
            .cards_in(&column.column_type)
            .into_iter()
            .enumerate()
            .map(|(index, card)| DraggableView {
                draggable_id: card.draggable_id(),
                index,
                name: card.name,
            })
            .collect();

        ColumnView {
            column_type: column.column_type.clone(),
            display_name: column.display_name.clone(),
            index: column.index,
            drop_disabled: !self.gate.is_drop_enabled(column),
            cards,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            name: BoardConfig::default().name,
            registry: ColumnRegistry::default(),
            cards: default_cards(),
            gate: AdjacencyGate::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(board: &mut Board, column: &str, index: usize) {
        let card = board.cards_in(&column.into())[index].draggable_id();
        board
            .on_drag_start(&DragStart::new(card, DraggableLocation::new(column, index)))
            .unwrap();
    }

    fn drop_on(from: (&str, usize), to: (&str, usize)) -> DragEnd {
        DragEnd::DroppedOn {
            source: DraggableLocation::new(from.0, from.1),
            destination: DraggableLocation::new(to.0, to.1),
        }
    }

    fn ids(cards: &[Card]) -> Vec<u32> {
        cards.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert_eq!(board.cards().len(), 9);
        assert_eq!(board.columns().len(), 4);
        assert_eq!(board.drag_state(), &DragState::Idle);
        assert_eq!(ids(&board.cards_in(&"todo".into())), vec![1, 3, 9]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = BoardConfig::default();
        config.cards.push(Card::new(99, "Stray", "archived"));

        assert!(matches!(
            Board::new(config),
            Err(StepboardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_drag_start_from_testing_enables_neighbours() {
        let mut board = Board::default();
        start(&mut board, "testing", 0);

        assert!(board.is_drop_enabled(&"inProgress".into()));
        assert!(board.is_drop_enabled(&"done".into()));
        assert!(!board.is_drop_enabled(&"todo".into()));
        assert!(!board.is_drop_enabled(&"testing".into()));
        assert!(!board.is_drop_enabled(&"archived".into()));
    }

    #[test]
    fn test_drag_start_unknown_column() {
        let mut board = Board::default();
        start(&mut board, "todo", 0);

        let result = board.on_drag_start(&DragStart::new("1", DraggableLocation::new("archived", 0)));

        assert!(matches!(result, Err(StepboardError::InvalidColumn(c)) if c == "archived"));
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_move_is_applied_to_state() {
        let mut board = Board::default();
        start(&mut board, "todo", 0);

        let outcome = board
            .on_drag_end(drop_on(("todo", 0), ("inProgress", 1)))
            .unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Moved {
                card: CardId::new(1),
                from: "todo".into(),
                to: "inProgress".into(),
            }
        );
        assert_eq!(ids(&board.cards_in(&"todo".into())), vec![3, 9]);
        assert_eq!(ids(&board.cards_in(&"inProgress".into())), vec![2, 1, 4]);
        assert_eq!(
            board.card(&CardId::new(1)).unwrap().column_type.as_str(),
            "inProgress"
        );
        assert_eq!(board.cards().len(), 9);
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_other_columns_are_untouched() {
        let mut board = Board::default();
        let testing_before = board.cards_in(&"testing".into());
        let done_before = board.cards_in(&"done".into());

        start(&mut board, "inProgress", 1);
        board
            .on_drag_end(drop_on(("inProgress", 1), ("todo", 3)))
            .unwrap();

        assert_eq!(board.cards_in(&"testing".into()), testing_before);
        assert_eq!(board.cards_in(&"done".into()), done_before);
        assert_eq!(ids(&board.cards_in(&"todo".into())), vec![1, 3, 9, 4]);
    }

    #[test]
    fn test_drop_outside_is_a_no_op() {
        let mut board = Board::default();
        let snapshot = board.cards().to_vec();
        start(&mut board, "todo", 0);

        let outcome = board
            .on_drag_end(DragEnd::DroppedOutside {
                source: DraggableLocation::new("todo", 0),
            })
            .unwrap();

        assert_eq!(outcome, DropOutcome::Cancelled);
        assert_eq!(board.cards(), snapshot.as_slice());
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_same_column_drop_is_unchanged() {
        let mut board = Board::default();
        let snapshot = board.cards().to_vec();
        start(&mut board, "testing", 0);

        let outcome = board
            .on_drag_end(drop_on(("testing", 0), ("testing", 2)))
            .unwrap();

        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(board.cards(), snapshot.as_slice());
    }

    #[test]
    fn test_non_adjacent_drop_is_rejected() {
        let mut board = Board::default();
        let snapshot = board.cards().to_vec();
        start(&mut board, "todo", 0);

        let result = board.on_drag_end(drop_on(("todo", 0), ("testing", 0)));

        assert!(matches!(result, Err(StepboardError::DropRejected { .. })));
        assert_eq!(board.cards(), snapshot.as_slice());
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_mismatched_source_is_rejected() {
        let mut board = Board::default();
        let snapshot = board.cards().to_vec();
        start(&mut board, "todo", 0);

        // inProgress is next to todo, but the card would come from done
        let result = board.on_drag_end(drop_on(("done", 0), ("inProgress", 0)));

        assert!(matches!(result, Err(StepboardError::DropRejected { .. })));
        assert_eq!(board.cards(), snapshot.as_slice());
        assert_eq!(
            board.card(&CardId::new(8)).unwrap().column_type.as_str(),
            "done"
        );
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_without_drag_start_is_rejected() {
        let mut board = Board::default();

        let result = board.on_drag_end(drop_on(("todo", 0), ("inProgress", 0)));
        assert!(matches!(result, Err(StepboardError::DropRejected { .. })));
    }

    #[test]
    fn test_out_of_range_drop_leaves_state_intact() {
        let mut board = Board::default();
        let snapshot = board.cards().to_vec();
        start(&mut board, "done", 0);

        let result = board.on_drag_end(drop_on(("done", 5), ("testing", 0)));

        assert!(matches!(
            result,
            Err(StepboardError::PositionOutOfRange { .. })
        ));
        assert_eq!(board.cards(), snapshot.as_slice());
    }

    #[test]
    fn test_drop_onto_unknown_column() {
        let mut board = Board::default();
        start(&mut board, "todo", 0);

        let result = board.on_drag_end(drop_on(("todo", 0), ("archived", 0)));
        assert!(matches!(result, Err(StepboardError::InvalidColumn(_))));
    }

    #[test]
    fn test_card_can_walk_across_the_board() {
        let mut board = Board::default();
        let steps = [("todo", "inProgress"), ("inProgress", "testing"), ("testing", "done")];

        for (from, to) in steps {
            let index = board
                .cards_in(&from.into())
                .iter()
                .position(|c| c.id == CardId::new(9))
                .unwrap();
            start(&mut board, from, index);
            board.on_drag_end(drop_on((from, index), (to, 0))).unwrap();
        }

        assert_eq!(ids(&board.cards_in(&"done".into())), vec![9, 8]);
    }

    #[test]
    fn test_view_reflects_gate_and_keys_by_id() {
        let mut board = Board::default();

        let idle = board.view();
        assert_eq!(idle.columns.len(), 4);
        assert!(idle.columns.iter().all(|c| c.drop_disabled));

        start(&mut board, "testing", 0);
        let dragging = board.view();

        let disabled: Vec<(u32, bool)> = dragging
            .columns
            .iter()
            .map(|c| (c.index, c.drop_disabled))
            .collect();
        assert_eq!(disabled, vec![(1, true), (2, false), (3, true), (4, false)]);

        let testing = &dragging.columns[2];
        assert_eq!(testing.display_name, "Testing");
        let keys: Vec<&str> = testing.cards.iter().map(|c| c.draggable_id.as_str()).collect();
        assert_eq!(keys, vec!["6", "5", "7"]);
        assert_eq!(testing.cards[1].index, 1);
        assert_eq!(testing.cards[1].name, "Story 5");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let board = Board::default();
        let json = serde_json::to_value(board.view()).unwrap();

        let first = &json["columns"][0];
        assert_eq!(first["columnType"], "todo");
        assert_eq!(first["dropDisabled"], true);
        assert_eq!(first["cards"][0]["draggableId"], "1");
    }
}
