//! Single-card reward valuation examples

use bigdecimal::BigDecimal;
use rewards_core::{
    CardRewardConfig, CategoryResolver, MccCategoryTable, MerchantSignal, RateTable,
    RewardCalculator,
};

fn dec(mantissa: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(mantissa.into(), scale)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💳 Rewards Core - Card Valuation Examples\n");

    // 1. MCC category resolution
    println!("📊 MCC Category Resolution:");
    let table = MccCategoryTable::new();
    for mcc in [5812u32, 5411, 3058, 3100, 4900, 9311, 9999999] {
        println!("  {:>7} -> {}", mcc, table.resolve(mcc));
    }
    println!();

    // 2. A cash-back card with bonus categories
    println!("💵 Cash-back Valuation:");
    let cashback_card = CardRewardConfig::cashback(
        "Everyday Cash",
        RateTable::new()
            .with("Dining - Restaurants", dec(3, 2))
            .with("Gas - Service Stations", dec(2, 2))
            .with("default", dec(1, 2)),
    );

    let calculator = RewardCalculator::new();
    let purchases = [
        (dec(8575, 2), 5812u32, "dinner"),
        (dec(4200, 2), 5541, "fuel"),
        (dec(12999, 2), 5732, "electronics"),
    ];

    for (amount, mcc, label) in purchases.iter() {
        let value =
            calculator.reward_value(amount, MerchantSignal::Mcc(*mcc), &cashback_card)?;
        println!("  ${:>8} {} (MCC {}) earns ${}", amount, label, mcc, value);
    }
    println!();

    // 3. A points card converted through its point value
    println!("✈️  Points Valuation:");
    let points_card = CardRewardConfig::points(
        "Premier Travel",
        RateTable::new()
            .with("Travel - Airlines", dec(5, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(125, 4), // 1.25 cents per point
    );

    let airfare = dec(45000, 2);
    let value = calculator.reward_value(&airfare, MerchantSignal::Mcc(4511), &points_card)?;
    println!("  ${} airfare at 5x earns ${}", airfare, value);
    println!();

    // 4. Fallback behavior
    println!("🛟 Fallbacks:");
    let sparse_card = CardRewardConfig::cashback(
        "Sparse",
        RateTable::new().with("Dining - Restaurants", dec(3, 2)),
    );
    let value =
        calculator.reward_value(&BigDecimal::from(100), MerchantSignal::Mcc(9999999), &sparse_card)?;
    println!(
        "  Unknown merchant on a card with no default entry earns ${} (1% fallback)",
        value
    );

    // 5. Category labels work directly, without an MCC
    let value = calculator.reward_value(
        &BigDecimal::from(100),
        MerchantSignal::Category("Dining - Restaurants".to_string()),
        &sparse_card,
    )?;
    println!("  The same card by resolved label earns ${}", value);

    Ok(())
}
