//! Flat-record CSV snapshots of a ledger.
//!
//! Budgets are written with their limit only and transactions without ids.
//! Loading replays every row through the ledger's own operations, so derived
//! budget totals are rebuilt rather than trusted from the file.

use anyhow::{Context, Result};
use std::path::Path;

use crate::ledger::{parse_amount, Ledger, DATE_FORMAT};
use crate::models::TransactionDraft;

const HEADER: [&str; 6] = ["record", "date", "description", "category", "kind", "amount"];
const RECORD_BUDGET: &str = "budget";
const RECORD_TRANSACTION: &str = "transaction";

/// Write the ledger to `path`. Returns the number of records written.
pub(crate) fn export(ledger: &Ledger, path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create snapshot file: {}", path.display()))?;
    wtr.write_record(HEADER)?;

    let mut count = 0;
    for budget in ledger.budgets() {
        let limit = budget.limit.to_string();
        wtr.write_record([RECORD_BUDGET, "", "", budget.category.as_str(), "", limit.as_str()])?;
        count += 1;
    }
    for txn in ledger.transactions() {
        let date = txn.date.format(DATE_FORMAT).to_string();
        let amount = txn.amount.to_string();
        wtr.write_record([
            RECORD_TRANSACTION,
            date.as_str(),
            txn.description.as_str(),
            txn.category.as_str(),
            txn.kind.as_str(),
            amount.as_str(),
        ])?;
        count += 1;
    }
    wtr.flush()
        .with_context(|| format!("Failed to write snapshot file: {}", path.display()))?;

    tracing::info!(path = %path.display(), records = count, "snapshot exported");
    Ok(count)
}

/// Rebuild a ledger from a snapshot written by [`export`].
pub(crate) fn load(path: &Path) -> Result<Ledger> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open snapshot file: {}", path.display()))?;

    let mut ledger = Ledger::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Record {}: failed to read", i + 1))?;
        // Quoted fields may span lines, so take the line from the parser.
        let line = record.position().map_or(i as u64 + 2, |p| p.line());
        let field = |n: usize| record.get(n).map(str::trim).unwrap_or("");

        match field(0).to_lowercase().as_str() {
            RECORD_BUDGET => {
                let limit = parse_amount("Limit", field(5))
                    .with_context(|| format!("Line {line}: invalid budget"))?;
                ledger
                    .upsert_budget(field(3), limit)
                    .with_context(|| format!("Line {line}: invalid budget"))?;
            }
            RECORD_TRANSACTION => {
                let draft = TransactionDraft::new(field(4), field(1), field(5), field(3), field(2));
                ledger
                    .add_transaction(&draft)
                    .with_context(|| format!("Line {line}: invalid transaction"))?;
            }
            "" => continue,
            other => anyhow::bail!("Line {line}: unknown record type '{other}'"),
        }
    }

    tracing::info!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        budgets = ledger.budgets().len(),
        "snapshot loaded"
    );
    Ok(ledger)
}

#[cfg(test)]
mod tests;
