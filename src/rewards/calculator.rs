//! Reward valuation engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::mcc::MccCategoryTable;
use crate::rewards::card::CardRewardConfig;
use crate::rewards::catalog::CardCatalog;
use crate::traits::CategoryResolver;
use crate::types::{MerchantSignal, RewardError, RewardResult, RewardUnit, Transaction};

/// Rate substituted when a card configures neither a matching category nor
/// a `"default"` entry (1%)
pub fn fallback_default_rate() -> BigDecimal {
    BigDecimal::new(1.into(), 2)
}

/// The winning card for a transaction and its reward value in dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestCard {
    /// Display name of the winning card
    pub name: String,
    /// Dollar value of the reward it earns
    pub value: BigDecimal,
}

/// Reward calculator: a pure valuation engine over card configurations
///
/// Generic over the [`CategoryResolver`] used to turn raw MCCs into
/// category labels; defaults to the built-in [`MccCategoryTable`]. The
/// calculator holds no mutable state and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct RewardCalculator<R = MccCategoryTable> {
    resolver: R,
}

impl RewardCalculator<MccCategoryTable> {
    /// Create a calculator backed by the built-in MCC category table
    pub fn new() -> Self {
        Self {
            resolver: MccCategoryTable::new(),
        }
    }
}

impl Default for RewardCalculator<MccCategoryTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CategoryResolver> RewardCalculator<R> {
    /// Create a calculator with a custom category resolver
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// The resolver backing this calculator
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Compute the dollar value of the reward a card earns on a purchase
    ///
    /// The effective rate is resolved in order: a literal MCC key in the
    /// card's rate table, then the first category-label entry matching the
    /// resolved category (insertion order, `"default"` excluded), then the
    /// card's `"default"` entry, then the 1% fallback constant.
    ///
    /// Rate values are applied exactly as configured: for cash back the
    /// reward is `amount * rate`, for points it is
    /// `amount * rate * point_value`. Whether a rate is a fraction or a
    /// multiplier is the config author's convention; the calculator does
    /// not normalize. No rounding is applied; callers round for display.
    ///
    /// A negative amount is a caller error and is rejected before any
    /// lookup; a missing category or rate never fails.
    pub fn reward_value(
        &self,
        amount: &BigDecimal,
        merchant: impl Into<MerchantSignal>,
        card: &CardRewardConfig,
    ) -> RewardResult<BigDecimal> {
        if amount < &BigDecimal::from(0) {
            return Err(RewardError::InvalidAmount(format!(
                "transaction amount must be non-negative, got {amount}"
            )));
        }

        let rate = self.effective_rate(&merchant.into(), card);

        let value = match card.unit {
            RewardUnit::Cashback => amount * rate,
            RewardUnit::Points => amount * rate * &card.point_value,
        };

        Ok(value)
    }

    /// Score a transaction against a single card
    pub fn score(
        &self,
        transaction: &Transaction,
        card: &CardRewardConfig,
    ) -> RewardResult<BigDecimal> {
        self.reward_value(&transaction.amount, transaction.merchant.clone(), card)
    }

    /// Score a transaction against every card in a catalog and return the
    /// best name/value pair
    ///
    /// Cards are scored in catalog iteration order; ties keep the card
    /// encountered first. An empty catalog yields `Ok(None)`.
    pub fn best_card(
        &self,
        transaction: &Transaction,
        catalog: &CardCatalog,
    ) -> RewardResult<Option<BestCard>> {
        let mut best: Option<BestCard> = None;

        for card in catalog.iter() {
            let value = self.score(transaction, card)?;
            let improves = match &best {
                Some(current) => value > current.value,
                None => true,
            };
            if improves {
                best = Some(BestCard {
                    name: card.name.clone(),
                    value,
                });
            }
        }

        Ok(best)
    }

    /// Resolve the effective rate for a merchant signal against a card
    fn effective_rate(&self, merchant: &MerchantSignal, card: &CardRewardConfig) -> BigDecimal {
        // Legacy direct-MCC keys bypass category resolution entirely
        if let MerchantSignal::Mcc(code) = merchant {
            if let Some(rate) = card.rates.mcc_rate(*code) {
                return rate.clone();
            }
        }

        let resolved = match merchant {
            MerchantSignal::Mcc(code) => self.resolver.resolve(*code),
            MerchantSignal::Category(label) => label.as_str(),
        };

        if let Some(rate) = card.rates.label_rate(resolved) {
            return rate.clone();
        }

        card.rates
            .default_rate()
            .cloned()
            .unwrap_or_else(fallback_default_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::card::RateTable;

    fn dec(mantissa: i64, scale: i64) -> BigDecimal {
        BigDecimal::new(mantissa.into(), scale)
    }

    fn flat_cashback(rate: BigDecimal) -> CardRewardConfig {
        CardRewardConfig::cashback("Flat", RateTable::new().with("default", rate))
    }

    #[test]
    fn default_only_card_applies_default_everywhere() {
        let calc = RewardCalculator::new();
        let card = flat_cashback(dec(2, 2));

        for merchant in [
            MerchantSignal::Mcc(5812),
            MerchantSignal::Mcc(9_999_999),
            MerchantSignal::Category("Travel - Lodging".to_string()),
        ] {
            let value = calc
                .reward_value(&BigDecimal::from(100), merchant, &card)
                .unwrap();
            assert_eq!(value, BigDecimal::from(2));
        }
    }

    #[test]
    fn direct_mcc_key_bypasses_category_resolution() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::cashback(
            "Legacy",
            RateTable::new()
                .with(5812u32, dec(5, 2))
                .with("default", dec(1, 2)),
        );

        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5812), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(5));

        // the same code arriving as a resolved label misses the MCC key
        let value = calc
            .reward_value(
                &BigDecimal::from(100),
                MerchantSignal::Category("Dining - Restaurants".to_string()),
                &card,
            )
            .unwrap();
        assert_eq!(value, BigDecimal::from(1));
    }

    #[test]
    fn mcc_resolves_to_category_label_rate() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::cashback(
            "Dining Card",
            RateTable::new()
                .with("Dining - Restaurants", dec(3, 2))
                .with("default", dec(1, 2)),
        );

        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5812), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(3));
    }

    #[test]
    fn points_convert_through_point_value() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::points(
            "Two Everywhere",
            RateTable::new().with("default", dec(2, 0)),
            dec(1, 2),
        );

        let value = calc
            .reward_value(&BigDecimal::from(50), MerchantSignal::Mcc(5411), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(1));
    }

    #[test]
    fn unknown_mcc_falls_back_to_default() {
        let calc = RewardCalculator::new();
        assert_eq!(calc.resolver().resolve(9_999_999), "Unknown Category");

        let card = flat_cashback(dec(1, 2));
        let value = calc
            .reward_value(&BigDecimal::from(200), MerchantSignal::Mcc(9_999_999), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(2));
    }

    #[test]
    fn missing_default_substitutes_one_percent() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::cashback(
            "No Default",
            RateTable::new().with("Dining - Restaurants", dec(3, 2)),
        );

        // grocery purchase matches nothing in the table
        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5411), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(1));
    }

    #[test]
    fn sentinel_never_matches_as_a_category() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::cashback(
            "Sentinel First",
            RateTable::new()
                .with("default", dec(1, 2))
                .with("Dining - Restaurants", dec(3, 2)),
        );

        // a resolved category literally equal to "default" takes the
        // fallback path, not a category match
        let value = calc
            .reward_value(
                &BigDecimal::from(100),
                MerchantSignal::Category("default".to_string()),
                &card,
            )
            .unwrap();
        assert_eq!(value, BigDecimal::from(1));

        // a category entry after the sentinel still wins for its own label
        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5812), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(3));
    }

    #[test]
    fn overlapping_labels_first_match_wins() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::cashback(
            "Overlap",
            RateTable::new()
                .with("Travel - Airlines", dec(2, 2))
                .with("Travel - Airlines", dec(6, 2))
                .with("default", dec(1, 2)),
        );

        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(3100), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(2));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let calc = RewardCalculator::new();
        let card = flat_cashback(dec(1, 2));

        let err = calc
            .reward_value(&BigDecimal::from(-10), MerchantSignal::Mcc(5812), &card)
            .unwrap_err();
        assert!(matches!(err, RewardError::InvalidAmount(_)));
    }

    #[test]
    fn zero_amount_is_valid() {
        let calc = RewardCalculator::new();
        let card = flat_cashback(dec(1, 2));

        let value = calc
            .reward_value(&BigDecimal::from(0), MerchantSignal::Mcc(5812), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(0));
    }

    #[test]
    fn valuation_is_deterministic() {
        let calc = RewardCalculator::new();
        let card = CardRewardConfig::points(
            "Repeatable",
            RateTable::new()
                .with("Grocery - Supermarkets and Grocery Stores", dec(3, 0))
                .with("default", dec(1, 0)),
            dec(125, 4),
        );

        let first = calc
            .reward_value(&dec(4999, 2), MerchantSignal::Mcc(5411), &card)
            .unwrap();
        let second = calc
            .reward_value(&dec(4999, 2), MerchantSignal::Mcc(5411), &card)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn best_card_prefers_higher_value_and_first_on_tie() {
        let calc = RewardCalculator::new();
        let mut catalog = CardCatalog::new();
        catalog.add(flat_cashback(dec(1, 2))).unwrap();
        catalog
            .add(CardRewardConfig::cashback(
                "Dining Card",
                RateTable::new()
                    .with("Dining - Restaurants", dec(3, 2))
                    .with("default", dec(1, 2)),
            ))
            .unwrap();
        catalog
            .add(CardRewardConfig::cashback(
                "Late Dining Card",
                RateTable::new()
                    .with("Dining - Restaurants", dec(3, 2))
                    .with("default", dec(1, 2)),
            ))
            .unwrap();

        let dinner = Transaction::new(BigDecimal::from(100), 5812);
        let best = calc.best_card(&dinner, &catalog).unwrap().unwrap();
        assert_eq!(best.name, "Dining Card");
        assert_eq!(best.value, BigDecimal::from(3));
    }

    #[test]
    fn best_card_on_empty_catalog_is_none() {
        let calc = RewardCalculator::new();
        let catalog = CardCatalog::new();
        let txn = Transaction::new(BigDecimal::from(100), 5812);
        assert_eq!(calc.best_card(&txn, &catalog).unwrap(), None);
    }

    #[test]
    fn best_card_propagates_invalid_amount() {
        let calc = RewardCalculator::new();
        let mut catalog = CardCatalog::new();
        catalog.add(flat_cashback(dec(1, 2))).unwrap();

        let txn = Transaction::new(BigDecimal::from(-5), 5812);
        assert!(calc.best_card(&txn, &catalog).is_err());
    }

    #[test]
    fn custom_resolver_substitution() {
        struct Everything;
        impl CategoryResolver for Everything {
            fn resolve(&self, _mcc: u32) -> &str {
                "Dining - Restaurants"
            }
        }

        let calc = RewardCalculator::with_resolver(Everything);
        let card = CardRewardConfig::cashback(
            "Dining Card",
            RateTable::new()
                .with("Dining - Restaurants", dec(3, 2))
                .with("default", dec(1, 2)),
        );

        // an MCC the built-in table would call Government
        let value = calc
            .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(9311), &card)
            .unwrap();
        assert_eq!(value, BigDecimal::from(3));
    }
}
