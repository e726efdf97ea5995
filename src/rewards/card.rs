//! Card reward programs and their rate tables

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::RewardUnit;

/// Reserved rate-table key for the card's catch-all rate
///
/// The sentinel is consulted only as a fallback; it is never matched as a
/// merchant category, even when a resolved category label happens to equal
/// it literally.
pub const DEFAULT_RATE_KEY: &str = "default";

/// A rate-table key: either a raw MCC or a free-text category label
///
/// Raw-MCC keys exist for card programs defined directly against network
/// codes; most programs key off category labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateKey {
    /// Literal Merchant Category Code key
    Mcc(u32),
    /// Free-text category label, including the `"default"` sentinel
    Label(String),
}

impl RateKey {
    /// Whether this key is the reserved `"default"` sentinel
    pub fn is_default(&self) -> bool {
        matches!(self, RateKey::Label(label) if label == DEFAULT_RATE_KEY)
    }
}

impl From<u32> for RateKey {
    fn from(mcc: u32) -> Self {
        RateKey::Mcc(mcc)
    }
}

impl From<&str> for RateKey {
    fn from(label: &str) -> Self {
        RateKey::Label(label.to_string())
    }
}

impl From<String> for RateKey {
    fn from(label: String) -> Self {
        RateKey::Label(label)
    }
}

/// Insertion-ordered mapping from rate keys to reward rates
///
/// Lookups are a single linear pass over the entries and the FIRST match
/// wins. When two entries could match the same transaction, insertion
/// order decides; no precedence ranking exists between overlapping labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    entries: Vec<(RateKey, BigDecimal)>,
}

impl RateTable {
    /// Create an empty rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, builder style
    pub fn with(mut self, key: impl Into<RateKey>, rate: BigDecimal) -> Self {
        self.push(key, rate);
        self
    }

    /// Append an entry
    pub fn push(&mut self, key: impl Into<RateKey>, rate: BigDecimal) {
        self.entries.push((key.into(), rate));
    }

    /// Rate for a literal MCC key, if one is configured
    pub fn mcc_rate(&self, mcc: u32) -> Option<&BigDecimal> {
        self.entries
            .iter()
            .find(|(key, _)| matches!(key, RateKey::Mcc(code) if *code == mcc))
            .map(|(_, rate)| rate)
    }

    /// Rate for a category label, excluding the `"default"` sentinel
    pub fn label_rate(&self, label: &str) -> Option<&BigDecimal> {
        self.entries
            .iter()
            .find(|(key, _)| {
                !key.is_default() && matches!(key, RateKey::Label(l) if l == label)
            })
            .map(|(_, rate)| rate)
    }

    /// The card's configured catch-all rate, if any
    pub fn default_rate(&self) -> Option<&BigDecimal> {
        self.entries
            .iter()
            .find(|(key, _)| key.is_default())
            .map(|(_, rate)| rate)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(RateKey, BigDecimal)> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One card's reward program
///
/// Constructed once at configuration-load time from static data and
/// immutable thereafter. Rate values are whatever units the config author
/// chose (a fraction such as `0.03` or a multiplier such as `3`); the
/// crate does not normalize between the two conventions, it only makes the
/// payout unit explicit per card. A table without a `"default"` entry is
/// legal; the calculator substitutes a 1% fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRewardConfig {
    /// Display identifier for the card
    pub name: String,
    /// Category/MCC keys mapped to reward rates, in insertion order
    pub rates: RateTable,
    /// Whether rates pay out as cash back or as points
    pub unit: RewardUnit,
    /// Dollar value of one point; consulted only when `unit` is `Points`
    #[serde(default = "default_point_value")]
    pub point_value: BigDecimal,
}

/// Conventional one-cent point value
fn default_point_value() -> BigDecimal {
    BigDecimal::new(1.into(), 2)
}

impl CardRewardConfig {
    /// Create a cash-back card; the point value is unused for cash back
    pub fn cashback(name: impl Into<String>, rates: RateTable) -> Self {
        Self {
            name: name.into(),
            rates,
            unit: RewardUnit::Cashback,
            point_value: default_point_value(),
        }
    }

    /// Create a points card with an explicit per-point dollar value
    pub fn points(name: impl Into<String>, rates: RateTable, point_value: BigDecimal) -> Self {
        Self {
            name: name.into(),
            rates,
            unit: RewardUnit::Points,
            point_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(mantissa: i64, scale: i64) -> BigDecimal {
        BigDecimal::new(mantissa.into(), scale)
    }

    #[test]
    fn first_match_wins_on_duplicate_labels() {
        let table = RateTable::new()
            .with("Travel - Transportation", dec(2, 2))
            .with("Travel - Transportation", dec(5, 2));
        assert_eq!(table.label_rate("Travel - Transportation"), Some(&dec(2, 2)));
    }

    #[test]
    fn sentinel_is_not_a_category() {
        let table = RateTable::new()
            .with("default", dec(1, 2))
            .with("Dining - Restaurants", dec(3, 2));
        assert_eq!(table.label_rate("default"), None);
        assert_eq!(table.default_rate(), Some(&dec(1, 2)));
        // a later category entry still matches even with the sentinel first
        assert_eq!(table.label_rate("Dining - Restaurants"), Some(&dec(3, 2)));
    }

    #[test]
    fn mcc_and_label_keys_are_distinct() {
        let table = RateTable::new()
            .with(5812u32, dec(5, 2))
            .with("Dining - Restaurants", dec(3, 2));
        assert_eq!(table.mcc_rate(5812), Some(&dec(5, 2)));
        assert_eq!(table.mcc_rate(5411), None);
        assert_eq!(table.label_rate("Dining - Restaurants"), Some(&dec(3, 2)));
    }

    #[test]
    fn rate_table_serde_preserves_order() {
        let table = RateTable::new()
            .with("Dining - Restaurants", dec(3, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("default", dec(1, 0));
        let json = serde_json::to_string(&table).unwrap();
        let back: RateTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
        assert_eq!(back.label_rate("Dining - Restaurants"), Some(&dec(3, 0)));
    }

    #[test]
    fn card_config_json_shape() {
        let json = r#"{
            "name": "Test Card",
            "rates": [[5812, "0.05"], ["default", "0.01"]],
            "unit": "cashback"
        }"#;
        let card: CardRewardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Test Card");
        assert_eq!(card.unit, RewardUnit::Cashback);
        assert_eq!(card.rates.mcc_rate(5812), Some(&dec(5, 2)));
        assert_eq!(card.rates.default_rate(), Some(&dec(1, 2)));
        // omitted point_value defaults to one cent
        assert_eq!(card.point_value, dec(1, 2));
    }
}
