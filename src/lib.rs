//! # Rewards Core
//!
//! A library for valuing credit-card rewards: given a transaction and a
//! card's reward configuration, compute the dollar value of the reward
//! earned, and across a catalog of cards pick the one that earns the most.
//!
//! ## Features
//!
//! - **Reward valuation**: pure, deterministic dollar-value computation
//!   over cash-back and points rate tables
//! - **MCC resolution**: built-in Merchant Category Code table with
//!   range-band fallback, swappable behind a trait
//! - **Card catalog**: explicit registry of card programs with a built-in
//!   standard seed and JSON loading
//! - **Best-card selection**: highest-earning card for a transaction
//! - **Batch scoring**: CSV adapter keyed on `Amount`/`MCC` columns with
//!   per-row skip-and-continue error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use rewards_core::{CardRewardConfig, MerchantSignal, RateTable, RewardCalculator};
//!
//! let card = CardRewardConfig::cashback(
//!     "Flat Two Percent",
//!     RateTable::new().with("default", BigDecimal::new(2.into(), 2)),
//! );
//!
//! let calculator = RewardCalculator::new();
//! let value = calculator
//!     .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5812), &card)
//!     .unwrap();
//! assert_eq!(value, BigDecimal::from(2));
//! ```

pub mod ingest;
pub mod mcc;
pub mod rewards;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use mcc::*;
pub use rewards::*;
pub use traits::*;
pub use types::*;

// Re-export the standard catalog seed for convenience
pub use rewards::seed::standard_catalog;
