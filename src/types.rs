//! Core types and data structures for reward valuation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a card program pays out earned rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardUnit {
    /// Cash back - the rate applies directly to the transaction amount
    Cashback,
    /// Points/miles - the rate is a points-per-dollar multiplier that must
    /// be converted to dollars through the card's point value
    Points,
}

/// The merchant-category signal attached to a transaction
///
/// Callers may know either the raw Merchant Category Code from the payment
/// network or an already-resolved category label; both are accepted
/// everywhere a transaction is scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MerchantSignal {
    /// Raw 4-digit Merchant Category Code
    Mcc(u32),
    /// Resolved category label (e.g. "Dining - Restaurants")
    Category(String),
}

impl From<u32> for MerchantSignal {
    fn from(mcc: u32) -> Self {
        MerchantSignal::Mcc(mcc)
    }
}

impl From<&str> for MerchantSignal {
    fn from(category: &str) -> Self {
        MerchantSignal::Category(category.to_string())
    }
}

impl From<String> for MerchantSignal {
    fn from(category: String) -> Self {
        MerchantSignal::Category(category)
    }
}

/// One purchase event to be scored
///
/// Transient input to the reward calculator; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction amount in dollars
    pub amount: BigDecimal,
    /// Merchant category signal (raw MCC or resolved label)
    pub merchant: MerchantSignal,
    /// Date of the purchase, when the data source carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(amount: BigDecimal, merchant: impl Into<MerchantSignal>) -> Self {
        Self {
            amount,
            merchant: merchant.into(),
            date: None,
        }
    }

    /// Attach a purchase date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Errors that can occur during reward valuation
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type for reward valuation operations
pub type RewardResult<T> = Result<T, RewardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_signal_conversions() {
        assert_eq!(MerchantSignal::from(5812), MerchantSignal::Mcc(5812));
        assert_eq!(
            MerchantSignal::from("Dining - Restaurants"),
            MerchantSignal::Category("Dining - Restaurants".to_string())
        );
    }

    #[test]
    fn transaction_serde_roundtrip() {
        let txn = Transaction::new(BigDecimal::from(100), 5812)
            .with_date(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
