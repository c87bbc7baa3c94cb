use rust_decimal::Decimal;

use crate::ledger::{Ledger, LedgerResult};
use crate::models::TransactionDraft;

const SAMPLE_BUDGETS: &[(&str, i64)] = &[
    ("Food & Dining", 400),
    ("Transportation", 200),
    ("Shopping", 300),
    ("Bills & Utilities", 500),
    ("Entertainment", 150),
];

// (kind, date, amount, category, description)
const SAMPLE_TRANSACTIONS: &[(&str, &str, &str, &str, &str)] = &[
    ("income", "2024-01-01", "3500", "Income", "Salary"),
    ("expense", "2024-01-02", "150", "Food & Dining", "Groceries"),
    ("expense", "2024-01-03", "80", "Transportation", "Gas"),
    ("expense", "2024-01-05", "200", "Shopping", "Clothes Shopping"),
    ("expense", "2024-01-10", "120", "Bills & Utilities", "Electric Bill"),
    ("expense", "2024-01-15", "75", "Food & Dining", "Restaurant"),
];

/// A ledger filled with the demo data shown on first launch.
pub(crate) fn sample_ledger() -> LedgerResult<Ledger> {
    let budgets: Vec<(String, Decimal)> = SAMPLE_BUDGETS
        .iter()
        .map(|&(category, limit)| (category.to_string(), Decimal::from(limit)))
        .collect();
    let transactions: Vec<TransactionDraft> = SAMPLE_TRANSACTIONS
        .iter()
        .map(|&(kind, date, amount, category, description)| {
            TransactionDraft::new(kind, date, amount, category, description)
        })
        .collect();

    let ledger = Ledger::from_parts(&budgets, &transactions)?;
    tracing::debug!(
        transactions = ledger.transaction_count(),
        budgets = ledger.budgets().len(),
        "seeded sample ledger"
    );
    Ok(ledger)
}
