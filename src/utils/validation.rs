//! Validation utilities

use bigdecimal::BigDecimal;

use crate::rewards::card::{CardRewardConfig, RateKey};
use crate::rewards::catalog::{CatalogError, CatalogResult};
use crate::traits::CardValidator;
use crate::types::{RewardError, RewardResult};

/// Validate that a transaction amount is non-negative
pub fn validate_amount(amount: &BigDecimal) -> RewardResult<()> {
    if amount < &BigDecimal::from(0) {
        Err(RewardError::InvalidAmount(format!(
            "transaction amount must be non-negative, got {amount}"
        )))
    } else {
        Ok(())
    }
}

/// Structural problems in a card configuration
///
/// Defects are reported rather than enforced: a card with a missing
/// `"default"` entry still values correctly through the 1% fallback, so
/// integrators choose their own policy at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CardDefect {
    #[error("card name is empty")]
    EmptyName,
    #[error("negative rate for key {0:?}")]
    NegativeRate(RateKey),
    #[error("no \"default\" entry; the 1% fallback applies")]
    MissingDefault,
}

/// Collect the structural defects of a card configuration
pub fn card_defects(card: &CardRewardConfig) -> Vec<CardDefect> {
    let mut defects = Vec::new();

    if card.name.trim().is_empty() {
        defects.push(CardDefect::EmptyName);
    }

    for (key, rate) in card.rates.iter() {
        if rate < &BigDecimal::from(0) {
            defects.push(CardDefect::NegativeRate(key.clone()));
        }
    }

    if card.rates.default_rate().is_none() {
        defects.push(CardDefect::MissingDefault);
    }

    defects
}

/// Strict card validator for catalog load time
///
/// Rejects empty names and negative rates; tolerates a missing `"default"`
/// entry because the calculator substitutes the fallback rate.
pub struct StrictCardValidator;

impl CardValidator for StrictCardValidator {
    fn validate_card(&self, card: &CardRewardConfig) -> CatalogResult<()> {
        for defect in card_defects(card) {
            match defect {
                CardDefect::MissingDefault => {}
                other => return Err(CatalogError::Validation(other.to_string())),
            }
        }

        Ok(())
    }
}
