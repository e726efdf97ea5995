//! Explicit card registry and seed loading
//!
//! The catalog is an owned, constructed registry: it is populated once at
//! startup (from the built-in seed, a JSON asset, or programmatically) and
//! passed explicitly to best-card selection, never reached through ambient
//! module-level state.

use serde::{Deserialize, Serialize};

use crate::rewards::card::CardRewardConfig;

/// Ordered registry of card reward configurations
///
/// Iteration order is insertion order, which doubles as the tie-break
/// order for best-card selection. Card names are unique within a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardCatalog {
    cards: Vec<CardRewardConfig>,
}

impl CardCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of cards, rejecting duplicate names
    pub fn from_cards(cards: Vec<CardRewardConfig>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.add(card)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON array of card definitions
    ///
    /// This is the seed-file boundary: a static, read-only data asset
    /// listing each card's name, rate entries (in order), payout unit, and
    /// point value.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let cards: Vec<CardRewardConfig> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Register a card
    pub fn add(&mut self, card: CardRewardConfig) -> CatalogResult<()> {
        if self.get(&card.name).is_some() {
            return Err(CatalogError::DuplicateCard(card.name));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Look up a card by display name
    pub fn get(&self, name: &str) -> Option<&CardRewardConfig> {
        self.cards.iter().find(|card| card.name == name)
    }

    /// Iterate cards in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CardRewardConfig> {
        self.cards.iter()
    }

    /// Number of registered cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Card '{0}' is already registered")]
    DuplicateCard(String),
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
