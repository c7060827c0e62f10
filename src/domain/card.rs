use crate::domain::column::ColumnId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::StepboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| crate::error::StepboardError::InvalidCardId(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A work item sitting in exactly one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnId,
}

impl Card {
    pub fn new(id: u32, name: &str, column_type: impl Into<ColumnId>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.to_string(),
            column_type: column_type.into(),
        }
    }

    /// Key used for the card's draggable; display names need not be unique
    pub fn draggable_id(&self) -> String {
        self.id.to_string()
    }
}

/// Cards a fresh board is seeded with
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new(1, "Story 1", "todo"),
        Card::new(3, "Story 3", "todo"),
        Card::new(9, "Story 9", "todo"),
        Card::new(2, "Story 2", "inProgress"),
        Card::new(4, "Story 4", "inProgress"),
        Card::new(6, "Story 6", "testing"),
        Card::new(5, "Story 5", "testing"),
        Card::new(7, "Story 7", "testing"),
        Card::new(8, "Story 8", "done"),
    ]
}

/// Returns the cards of one column, keeping their relative order
pub fn cards_in_column(cards: &[Card], column: &ColumnId) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| &card.column_type == column)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_parsing() {
        assert_eq!(CardId::from_str("7").unwrap(), CardId::new(7));
        assert_eq!(CardId::from_str(" 42 ").unwrap().value(), 42);

        assert!(matches!(
            CardId::from_str("Story 7"),
            Err(crate::error::StepboardError::InvalidCardId(id)) if id == "Story 7"
        ));
        assert!(CardId::from_str("").is_err());
        assert!(CardId::from_str("-1").is_err());
    }

    #[test]
    fn test_draggable_id_is_card_id() {
        let card = Card::new(9, "Story 9", "todo");
        assert_eq!(card.draggable_id(), "9");
        assert_eq!(CardId::from_str(&card.draggable_id()).unwrap(), card.id);
    }

    #[test]
    fn test_cards_in_column_preserves_order() {
        let cards = default_cards();

        let testing = cards_in_column(&cards, &"testing".into());
        let ids: Vec<u32> = testing.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![6, 5, 7]);

        assert!(cards_in_column(&cards, &"archived".into()).is_empty());
    }

    #[test]
    fn test_default_cards_have_unique_ids() {
        let cards = default_cards();
        let mut ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_card_deserialization() {
        let json = r#"{ "id": 1, "name": "Story 1", "type": "todo" }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card, Card::new(1, "Story 1", "todo"));
    }
}
