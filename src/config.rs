use crate::{
    domain::{
        card::{default_cards, Card},
        column::{default_columns, Column, ColumnRegistry},
    },
    error::{Result, StepboardError},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable board setup: the columns and the cards the board starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            columns: default_columns(),
            cards: default_cards(),
        }
    }
}

impl BoardConfig {
    /// Parses a JSON board configuration and validates it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON board configuration from disk
    #[cfg(feature = "file-config")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            columns = config.columns.len(),
            cards = config.cards.len(),
            "Loaded board configuration"
        );
        Ok(config)
    }

    /// Builds the column registry, checking the column rules along the way
    pub fn registry(&self) -> Result<ColumnRegistry> {
        ColumnRegistry::new(self.columns.clone())
    }

    /// Checks columns and seed cards for consistency
    ///
    /// Card ids must be unique and every card must sit in a known column.
    pub fn validate(&self) -> Result<()> {
        let registry = self.registry()?;

        let mut ids = HashSet::new();
        for card in &self.cards {
            if !ids.insert(card.id) {
                return Err(StepboardError::ConfigError(format!(
                    "duplicate card id {}",
                    card.id
                )));
            }
            if !registry.contains(&card.column_type) {
                return Err(StepboardError::ConfigError(format!(
                    "card {} references unknown column '{}'",
                    card.id, card.column_type
                )));
            }
        }

        Ok(())
    }
}
