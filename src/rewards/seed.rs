//! Built-in standard card catalog
//!
//! A canonical set of well-known US card programs, one entry per card.
//! Cash-back cards carry fractional rates (0.03 = 3%); points cards carry
//! per-dollar multipliers (3 = 3x) with an explicit point value. Rotating
//! or program-specific bonus categories keep their free-text labels; those
//! match only when a caller supplies the label directly as the merchant
//! signal.

use bigdecimal::BigDecimal;

use crate::rewards::card::{CardRewardConfig, RateTable};
use crate::rewards::catalog::{CardCatalog, CatalogResult};

fn dec(mantissa: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(mantissa.into(), scale)
}

/// One cent per point, the most common valuation
fn cent() -> BigDecimal {
    dec(1, 2)
}

/// Build the standard catalog of well-known card programs
pub fn standard_catalog() -> CatalogResult<CardCatalog> {
    let mut catalog = CardCatalog::new();

    // Chase
    catalog.add(CardRewardConfig::points(
        "Chase Sapphire Preferred",
        RateTable::new()
            .with("Travel - Transportation", dec(2, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("default", dec(1, 0)),
        dec(125, 4),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase Sapphire Reserve",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(15, 3),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Chase Freedom Unlimited",
        RateTable::new()
            .with("Drugstores - Drug Stores and Pharmacies", dec(3, 2))
            .with("Dining - Restaurants", dec(3, 2))
            .with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Chase Freedom Flex",
        RateTable::new()
            .with("Quarterly Rotating Categories", dec(5, 2))
            .with("Dining - Restaurants", dec(3, 2))
            .with("Drugstores - Drug Stores and Pharmacies", dec(3, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase Ink Business Preferred",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Shipping", dec(3, 0))
            .with("Internet, Cable, Phone Services", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(125, 4),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Chase Ink Business Cash",
        RateTable::new()
            .with("Office Supply Stores", dec(5, 2))
            .with("Internet, Cable, Phone Services", dec(5, 2))
            .with("Dining - Restaurants", dec(2, 2))
            .with("Gas - Service Stations", dec(2, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Chase Ink Business Unlimited",
        RateTable::new().with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase World of Hyatt",
        RateTable::new()
            .with("Travel - Lodging", dec(4, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("default", dec(1, 0)),
        dec(15, 3),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase United Explorer",
        RateTable::new()
            .with("Travel - Airlines", dec(2, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("Travel - Lodging", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase Southwest Rapid Rewards Plus",
        RateTable::new()
            .with("Travel - Airlines", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase Marriott Bonvoy Boundless",
        RateTable::new()
            .with("Travel - Lodging", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(85, 4),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Chase IHG Rewards Premier",
        RateTable::new()
            .with("Travel - Lodging", dec(3, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;

    // American Express
    catalog.add(CardRewardConfig::points(
        "American Express Gold Card",
        RateTable::new()
            .with("Dining - Restaurants", dec(4, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(4, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Platinum Card",
        RateTable::new()
            .with("Travel - Airlines", dec(5, 0))
            .with("Travel - Lodging", dec(5, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Green Card",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "American Express Blue Cash Preferred",
        RateTable::new()
            .with("Grocery - Supermarkets and Grocery Stores", dec(6, 2))
            .with("Streaming Services", dec(6, 2))
            .with("Gas - Service Stations", dec(3, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "American Express Blue Cash Everyday",
        RateTable::new()
            .with("Grocery - Supermarkets and Grocery Stores", dec(3, 2))
            .with("Gas - Service Stations", dec(2, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Everyday",
        RateTable::new()
            .with("Grocery - Supermarkets and Grocery Stores", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "American Express Cash Magnet",
        RateTable::new().with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Blue Business Plus",
        RateTable::new().with("default", dec(2, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Business Gold",
        RateTable::new()
            .with("Shipping", dec(4, 0))
            .with("Business - Advertising Services", dec(4, 0))
            .with("Gas - Service Stations", dec(3, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Hilton Honors",
        RateTable::new()
            .with("Travel - Lodging", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(5, 3),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Hilton Honors Surpass",
        RateTable::new()
            .with("Travel - Lodging", dec(6, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(5, 3),
    ))?;
    catalog.add(CardRewardConfig::points(
        "American Express Delta SkyMiles Gold",
        RateTable::new()
            .with("Travel - Airlines", dec(2, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;

    // Discover
    catalog.add(CardRewardConfig::cashback(
        "Discover it Cash Back",
        RateTable::new()
            .with("Quarterly Rotating Categories", dec(5, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Discover it Chrome",
        RateTable::new()
            .with("Gas - Service Stations", dec(2, 2))
            .with("Dining - Restaurants", dec(2, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Discover it Miles",
        RateTable::new().with("default", dec(15, 1)),
        cent(),
    ))?;

    // Capital One
    catalog.add(CardRewardConfig::points(
        "Capital One Venture",
        RateTable::new().with("default", dec(2, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Capital One Venture X",
        RateTable::new()
            .with("Travel - Airlines", dec(2, 0))
            .with("Travel - Lodging", dec(2, 0))
            .with("default", dec(2, 0)),
        dec(15, 3),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Capital One Quicksilver",
        RateTable::new().with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Capital One SavorOne",
        RateTable::new()
            .with("Dining - Restaurants", dec(3, 2))
            .with("Entertainment", dec(3, 2))
            .with("Grocery - Supermarkets and Grocery Stores", dec(3, 2))
            .with("default", dec(1, 2)),
    ))?;

    // Citi
    catalog.add(CardRewardConfig::cashback(
        "Citi Double Cash",
        RateTable::new().with("default", dec(2, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Citi Premier",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(3, 0))
            .with("Gas - Service Stations", dec(3, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Citi Custom Cash",
        RateTable::new()
            .with("Top Spending Category", dec(5, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Citi AAdvantage Platinum Select",
        RateTable::new()
            .with("Travel - Airlines", dec(2, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("Gas - Service Stations", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;

    // Wells Fargo
    catalog.add(CardRewardConfig::cashback(
        "Wells Fargo Active Cash",
        RateTable::new().with("default", dec(2, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Wells Fargo Autograph",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Dining - Restaurants", dec(3, 0))
            .with("Gas - Service Stations", dec(3, 0))
            .with("Streaming Services", dec(3, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;

    // U.S. Bank
    catalog.add(CardRewardConfig::points(
        "U.S. Bank Altitude Reserve",
        RateTable::new()
            .with("Travel - Transportation", dec(3, 0))
            .with("Mobile Wallet Purchases", dec(3, 0))
            .with("default", dec(1, 0)),
        dec(15, 3),
    ))?;
    catalog.add(CardRewardConfig::points(
        "U.S. Bank Altitude Go",
        RateTable::new()
            .with("Dining - Restaurants", dec(4, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(2, 0))
            .with("Streaming Services", dec(2, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "U.S. Bank Cash+",
        RateTable::new()
            .with("Two Categories of Choice", dec(5, 2))
            .with("default", dec(1, 2)),
    ))?;

    // Barclays
    catalog.add(CardRewardConfig::points(
        "Barclays JetBlue Plus",
        RateTable::new()
            .with("Travel - Airlines", dec(6, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(2, 0))
            .with("default", dec(1, 0)),
        dec(15, 3),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Barclays Arrival Plus",
        RateTable::new().with("default", dec(2, 0)),
        cent(),
    ))?;

    // Bank of America
    catalog.add(CardRewardConfig::cashback(
        "Bank of America Customized Cash Rewards",
        RateTable::new()
            .with("Choice Category", dec(3, 2))
            .with("Grocery - Supermarkets and Grocery Stores", dec(2, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Bank of America Travel Rewards",
        RateTable::new().with("default", dec(15, 1)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::points(
        "Bank of America Premium Rewards",
        RateTable::new()
            .with("Travel - Transportation", dec(2, 0))
            .with("Dining - Restaurants", dec(2, 0))
            .with("default", dec(15, 1)),
        cent(),
    ))?;

    // Credit unions and other issuers
    catalog.add(CardRewardConfig::points(
        "Pentagon Federal Platinum Rewards",
        RateTable::new()
            .with("Gas - Service Stations", dec(5, 0))
            .with("Grocery - Supermarkets and Grocery Stores", dec(3, 0))
            .with("default", dec(1, 0)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Navy Federal cashRewards",
        RateTable::new().with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::points(
        "USAA Rewards Visa",
        RateTable::new().with("default", dec(125, 2)),
        cent(),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "HSBC Cash Rewards Mastercard",
        RateTable::new().with("default", dec(15, 3)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "TD Bank Double Up",
        RateTable::new().with("default", dec(2, 2)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "PNC Cash Rewards",
        RateTable::new()
            .with("Gas - Service Stations", dec(4, 2))
            .with("default", dec(1, 2)),
    ))?;
    catalog.add(CardRewardConfig::cashback(
        "Synchrony Amazon Prime Store Card",
        RateTable::new()
            .with("Retail - Miscellaneous", dec(5, 2))
            .with("default", dec(1, 2)),
    ))?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::calculator::RewardCalculator;
    use crate::types::Transaction;

    #[test]
    fn standard_catalog_builds_cleanly() {
        let catalog = standard_catalog().unwrap();
        assert!(catalog.len() >= 40);
        assert!(catalog.get("Chase Sapphire Preferred").is_some());
        assert!(catalog.get("Citi Double Cash").is_some());
    }

    #[test]
    fn every_standard_card_has_a_default_entry() {
        let catalog = standard_catalog().unwrap();
        for card in catalog.iter() {
            assert!(
                card.rates.default_rate().is_some(),
                "card '{}' is missing a default entry",
                card.name
            );
        }
    }

    #[test]
    fn standard_catalog_scores_a_dining_purchase() {
        let catalog = standard_catalog().unwrap();
        let calc = RewardCalculator::new();
        let dinner = Transaction::new(BigDecimal::from(100), 5812);

        let best = calc.best_card(&dinner, &catalog).unwrap().unwrap();
        // Sapphire Reserve earns 3x at 1.5 cents per point on dining
        assert_eq!(best.name, "Chase Sapphire Reserve");
        assert_eq!(best.value, dec(45, 1));
    }

    #[test]
    fn standard_catalog_survives_json_roundtrip() {
        let catalog = standard_catalog().unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let back = CardCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
