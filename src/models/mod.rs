mod budget;
mod category;
mod transaction;

pub(crate) use budget::{Budget, BudgetStatus};
pub(crate) use category::{budget_categories, find_default, DEFAULT_CATEGORIES, INCOME_CATEGORY};
pub(crate) use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

#[cfg(test)]
mod tests;
