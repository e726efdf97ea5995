//! Batch transaction scoring over tabular data
//!
//! The adapter keys off exactly-named `Amount` and `MCC` header columns;
//! anything else in the file is ignored, except optional `Year`/`Month`/
//! `Day` columns which populate the transaction date. Rows that cannot be
//! parsed or that fail valuation are skipped and reported, never aborting
//! the batch.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rewards::calculator::{BestCard, RewardCalculator};
use crate::rewards::catalog::CardCatalog;
use crate::traits::CategoryResolver;
use crate::types::Transaction;

/// Required header naming the transaction amount
pub const AMOUNT_COLUMN: &str = "Amount";
/// Required header naming the merchant category code
pub const MCC_COLUMN: &str = "MCC";

/// Errors raised by the tabular adapter
///
/// These cover batch-level problems only; per-row problems become
/// [`SkippedRow`] entries in the report.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// One successfully scored input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    /// 1-based data-row number (excluding the header)
    pub row: u64,
    /// The parsed transaction
    pub transaction: Transaction,
    /// Best card for the transaction; `None` when the catalog is empty
    pub best: Option<BestCard>,
}

/// One rejected input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data-row number (excluding the header)
    pub row: u64,
    /// Why the row was skipped
    pub reason: String,
}

/// Outcome of scoring a tabular batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Rows scored successfully, in input order
    pub scored: Vec<ScoredRow>,
    /// Rows skipped with their reasons, in input order
    pub skipped: Vec<SkippedRow>,
}

impl BatchReport {
    /// Total number of data rows seen
    pub fn total_rows(&self) -> usize {
        self.scored.len() + self.skipped.len()
    }
}

/// Parse a display-formatted amount cell
///
/// Tolerates `$`, thousands separators, stray quotes, surrounding
/// whitespace, and accounting-style parenthesized negatives.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned = raw.replace(',', "").replace('"', "").replace('$', "");
    let cleaned = cleaned.trim();
    if let Some(inner) = cleaned
        .strip_prefix('(')
        .and_then(|value| value.strip_suffix(')'))
    {
        return inner.trim().parse::<BigDecimal>().ok().map(|amount| -amount);
    }
    cleaned.parse().ok()
}

/// Score every row of a CSV batch against a card catalog
///
/// The header row is required. Missing `Amount` or `MCC` headers fail the
/// whole batch; everything else is handled row by row, with problem rows
/// recorded in the report's `skipped` list.
pub fn score_batch<R: CategoryResolver>(
    csv_text: &str,
    catalog: &CardCatalog,
    calculator: &RewardCalculator<R>,
) -> IngestResult<BatchReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), index))
        .collect::<HashMap<String, usize>>();

    for required in [AMOUNT_COLUMN, MCC_COLUMN] {
        if !index_by_name.contains_key(required) {
            return Err(IngestError::MissingColumn(required.to_string()));
        }
    }

    let mut report = BatchReport::default();

    for (index, result_row) in reader.records().enumerate() {
        let row = (index as u64) + 1;

        let record = match result_row {
            Ok(record) => record,
            Err(err) => {
                report.skipped.push(SkippedRow {
                    row,
                    reason: format!("unreadable row: {err}"),
                });
                continue;
            }
        };

        let raw_amount = field(&record, &index_by_name, AMOUNT_COLUMN);
        let amount = match raw_amount.as_deref().and_then(parse_amount) {
            Some(amount) => amount,
            None => {
                report.skipped.push(SkippedRow {
                    row,
                    reason: format!(
                        "unparseable {AMOUNT_COLUMN} value '{}'",
                        raw_amount.unwrap_or_default()
                    ),
                });
                continue;
            }
        };

        let raw_mcc = field(&record, &index_by_name, MCC_COLUMN);
        let mcc = match raw_mcc.as_deref().map(str::trim).and_then(|v| v.parse::<u32>().ok()) {
            Some(mcc) => mcc,
            None => {
                report.skipped.push(SkippedRow {
                    row,
                    reason: format!(
                        "unparseable {MCC_COLUMN} value '{}'",
                        raw_mcc.unwrap_or_default()
                    ),
                });
                continue;
            }
        };

        let mut transaction = Transaction::new(amount, mcc);
        if let Some(date) = row_date(&record, &index_by_name) {
            transaction = transaction.with_date(date);
        }

        match calculator.best_card(&transaction, catalog) {
            Ok(best) => report.scored.push(ScoredRow {
                row,
                transaction,
                best,
            }),
            // per-row valuation failures (negative amounts) skip the row
            Err(err) => report.skipped.push(SkippedRow {
                row,
                reason: err.to_string(),
            }),
        }
    }

    Ok(report)
}

fn field(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    name: &str,
) -> Option<String> {
    let index = index_by_name.get(name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

/// Assemble a date from optional Year/Month/Day columns
fn row_date(record: &csv::StringRecord, index_by_name: &HashMap<String, usize>) -> Option<NaiveDate> {
    let year = field(record, index_by_name, "Year")?.trim().parse::<i32>().ok()?;
    let month = field(record, index_by_name, "Month")?.trim().parse::<u32>().ok()?;
    let day = field(record, index_by_name, "Day")?.trim().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::card::{CardRewardConfig, RateTable};

    fn dec(mantissa: i64, scale: i64) -> BigDecimal {
        BigDecimal::new(mantissa.into(), scale)
    }

    fn small_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog
            .add(CardRewardConfig::cashback(
                "Flat",
                RateTable::new().with("default", dec(1, 2)),
            ))
            .unwrap();
        catalog
            .add(CardRewardConfig::cashback(
                "Dining Card",
                RateTable::new()
                    .with("Dining - Restaurants", dec(3, 2))
                    .with("default", dec(1, 2)),
            ))
            .unwrap();
        catalog
    }

    #[test]
    fn parse_amount_handles_display_formats() {
        assert_eq!(parse_amount("65.50"), Some(dec(6550, 2)));
        assert_eq!(parse_amount("$65.50"), Some(dec(6550, 2)));
        assert_eq!(parse_amount("\"$1,234.00\""), Some(dec(123400, 2)));
        assert_eq!(parse_amount(" (25.00) "), Some(dec(-2500, 2)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn scores_rows_and_picks_best_card() {
        let csv = "Year,Month,Day,Time,Amount,Zip,MCC\n\
                   2025,4,10,720,$85.75,97330,5812\n\
                   2025,4,11,900,40.00,97330,5411\n";
        let report = score_batch(csv, &small_catalog(), &RewardCalculator::new()).unwrap();

        assert_eq!(report.total_rows(), 2);
        assert!(report.skipped.is_empty());

        let first = &report.scored[0];
        assert_eq!(first.row, 1);
        assert_eq!(first.transaction.amount, dec(8575, 2));
        assert_eq!(
            first.transaction.date,
            NaiveDate::from_ymd_opt(2025, 4, 10)
        );
        let best = first.best.as_ref().unwrap();
        assert_eq!(best.name, "Dining Card");

        // groceries fall to the flat default on both cards; first card wins
        let second = &report.scored[1];
        assert_eq!(second.best.as_ref().unwrap().name, "Flat");
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let csv = "Amount,MCC\n\
                   100.00,5812\n\
                   not-a-number,5812\n\
                   50.00,not-an-mcc\n\
                   (10.00),5812\n\
                   25.00,5411\n";
        let report = score_batch(csv, &small_catalog(), &RewardCalculator::new()).unwrap();

        assert_eq!(report.scored.len(), 2);
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(report.skipped[0].row, 2);
        assert!(report.skipped[0].reason.contains("Amount"));
        assert_eq!(report.skipped[1].row, 3);
        assert!(report.skipped[1].reason.contains("MCC"));
        // parenthesized amounts parse as negatives and fail valuation
        assert_eq!(report.skipped[2].row, 4);
        assert!(report.skipped[2].reason.contains("non-negative"));
    }

    #[test]
    fn missing_required_column_fails_the_batch() {
        let csv = "Amount,Code\n100.00,5812\n";
        let err = score_batch(csv, &small_catalog(), &RewardCalculator::new()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(col) if col == MCC_COLUMN));
    }

    #[test]
    fn empty_catalog_scores_with_no_best_card() {
        let csv = "Amount,MCC\n100.00,5812\n";
        let report = score_batch(csv, &CardCatalog::new(), &RewardCalculator::new()).unwrap();
        assert_eq!(report.scored.len(), 1);
        assert_eq!(report.scored[0].best, None);
    }

    #[test]
    fn extra_and_reordered_columns_are_tolerated() {
        let csv = "MCC,Merchant City,Amount\n5812,Corvallis,12.00\n";
        let report = score_batch(csv, &small_catalog(), &RewardCalculator::new()).unwrap();
        assert_eq!(report.scored.len(), 1);
        assert_eq!(report.scored[0].transaction.amount, dec(1200, 2));
    }
}
