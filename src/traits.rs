//! Traits for category resolution and extensibility

use crate::rewards::card::CardRewardConfig;
use crate::rewards::catalog::{CatalogError, CatalogResult};

/// Maps a raw Merchant Category Code to a category label
///
/// Implementations must be total and deterministic: every code resolves to
/// exactly one label, with unknown codes mapped to a terminal label rather
/// than an error. The crate ships [`crate::mcc::MccCategoryTable`]; callers
/// with their own network data can substitute any implementation.
pub trait CategoryResolver {
    /// Resolve an MCC to its category label
    fn resolve(&self, mcc: u32) -> &str;
}

/// Trait for implementing custom card-configuration validation rules
pub trait CardValidator: Send + Sync {
    /// Validate a card configuration before it enters a catalog
    fn validate_card(&self, card: &CardRewardConfig) -> CatalogResult<()>;
}

/// Default card validator with basic rules
pub struct DefaultCardValidator;

impl CardValidator for DefaultCardValidator {
    fn validate_card(&self, card: &CardRewardConfig) -> CatalogResult<()> {
        if card.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Card name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
