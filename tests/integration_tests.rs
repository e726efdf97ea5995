//! Integration tests for rewards-core

use bigdecimal::BigDecimal;
use rewards_core::{
    ingest::{score_batch, IngestError},
    standard_catalog,
    utils::{card_defects, StrictCardValidator},
    CardCatalog, CardRewardConfig, CardValidator, CategoryResolver, MccCategoryTable,
    MerchantSignal, RateTable, RewardCalculator, Transaction,
};

fn dec(mantissa: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(mantissa.into(), scale)
}

#[test]
fn test_complete_valuation_workflow() {
    let catalog = standard_catalog().unwrap();
    let calculator = RewardCalculator::new();

    // a two-card comparison on a $100 dining purchase
    let mut pair = CardCatalog::new();
    pair.add(CardRewardConfig::cashback(
        "Card A",
        RateTable::new().with("default", dec(1, 2)),
    ))
    .unwrap();
    pair.add(CardRewardConfig::cashback(
        "Card B",
        RateTable::new()
            .with("Dining - Restaurants", dec(3, 2))
            .with("default", dec(1, 2)),
    ))
    .unwrap();

    let dinner = Transaction::new(BigDecimal::from(100), 5812);
    let best = calculator.best_card(&dinner, &pair).unwrap().unwrap();
    assert_eq!(best.name, "Card B");
    assert_eq!(best.value, BigDecimal::from(3));

    // the full standard catalog beats the flat pair on the same purchase
    let best = calculator.best_card(&dinner, &catalog).unwrap().unwrap();
    assert!(best.value > BigDecimal::from(3));
}

#[test]
fn test_batch_scoring_against_standard_catalog() {
    let catalog = standard_catalog().unwrap();
    let calculator = RewardCalculator::new();

    let csv = "Year,Month,Day,Time,Amount,Zip,MCC\n\
               2025,4,10,720,$85.75,97330,5812\n\
               2025,4,10,900,\"$1,200.00\",97330,3058\n\
               2025,4,11,615,52.10,97330,5411\n\
               2025,4,11,700,oops,97330,5411\n\
               2025,4,12,810,-20.00,97330,5812\n";

    let report = score_batch(csv, &catalog, &calculator).unwrap();
    assert_eq!(report.total_rows(), 5);
    assert_eq!(report.scored.len(), 3);
    assert_eq!(report.skipped.len(), 2);

    // every scored row found a winner in a non-empty catalog
    for scored in &report.scored {
        assert!(scored.best.is_some());
        assert!(scored.transaction.date.is_some());
    }

    // the malformed amount and the negative amount are reported, in order
    assert_eq!(report.skipped[0].row, 4);
    assert_eq!(report.skipped[1].row, 5);
}

#[test]
fn test_catalog_seed_roundtrip_through_json() {
    let catalog = standard_catalog().unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let reloaded = CardCatalog::from_json_str(&json).unwrap();
    assert_eq!(catalog, reloaded);

    // valuation is identical through the reloaded catalog
    let calculator = RewardCalculator::new();
    let txn = Transaction::new(dec(4550, 2), 5411);
    assert_eq!(
        calculator.best_card(&txn, &catalog).unwrap(),
        calculator.best_card(&txn, &reloaded).unwrap()
    );
}

#[test]
fn test_standard_catalog_passes_strict_validation() {
    let catalog = standard_catalog().unwrap();
    for card in catalog.iter() {
        StrictCardValidator.validate_card(card).unwrap();
        assert!(card_defects(card).is_empty(), "defective card {}", card.name);
    }
}

#[test]
fn test_custom_resolver_drives_valuation() {
    // a resolver that only knows groceries
    struct GroceryOnly;
    impl CategoryResolver for GroceryOnly {
        fn resolve(&self, mcc: u32) -> &str {
            if mcc == 5411 {
                "Grocery - Supermarkets and Grocery Stores"
            } else {
                "Unknown Category"
            }
        }
    }

    let calculator = RewardCalculator::with_resolver(GroceryOnly);
    let card = CardRewardConfig::cashback(
        "Grocery Card",
        RateTable::new()
            .with("Grocery - Supermarkets and Grocery Stores", dec(3, 2))
            .with("Dining - Restaurants", dec(3, 2))
            .with("default", dec(1, 2)),
    );

    let groceries = calculator
        .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5411), &card)
        .unwrap();
    assert_eq!(groceries, BigDecimal::from(3));

    // dining resolves to Unknown Category under this resolver
    let dinner = calculator
        .reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(5812), &card)
        .unwrap();
    assert_eq!(dinner, BigDecimal::from(1));
}

#[test]
fn test_builtin_resolver_is_total() {
    let table = MccCategoryTable::new();
    for mcc in [0, 2999, 3058, 4511, 5411, 5812, 8220, 9311, 9_999_999] {
        assert!(!table.resolve(mcc).is_empty());
    }
}

#[test]
fn test_missing_column_is_batch_fatal() {
    let catalog = standard_catalog().unwrap();
    let calculator = RewardCalculator::new();

    let err = score_batch("Total,MCC\n10.00,5812\n", &catalog, &calculator).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn(col) if col == "Amount"));
}
