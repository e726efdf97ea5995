//! Catalog-wide best-card selection over a CSV batch

use rewards_core::{ingest::score_batch, standard_catalog, RewardCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🗂️  Rewards Core - Batch Best-Card Selection\n");

    let catalog = standard_catalog()?;
    println!("📇 Standard catalog holds {} cards\n", catalog.len());

    // the adapter keys off the Amount and MCC columns; everything else is
    // carried through or ignored
    let csv = "Year,Month,Day,Time,Amount,Zip,MCC\n\
               2025,4,10,720,$85.75,97330,5812\n\
               2025,4,10,901,\"$1,250.00\",97330,4511\n\
               2025,4,11,615,52.10,97330,5411\n\
               2025,4,11,702,19.99,97330,5815\n\
               2025,4,12,810,oops,97330,5812\n\
               2025,4,12,845,64.00,97330,5541\n";

    let calculator = RewardCalculator::new();
    let report = score_batch(csv, &catalog, &calculator)?;

    println!("🏆 Best card per transaction:");
    for scored in &report.scored {
        let date = scored
            .transaction
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        if let Some(best) = &scored.best {
            println!(
                "  row {} | {} | ${:>8} -> {} (${})",
                scored.row, date, scored.transaction.amount, best.name, best.value
            );
        }
    }
    println!();

    if !report.skipped.is_empty() {
        println!("⚠️  Skipped rows:");
        for skipped in &report.skipped {
            println!("  row {}: {}", skipped.row, skipped.reason);
        }
    }

    Ok(())
}
